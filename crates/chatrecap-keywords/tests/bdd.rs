//! BDD-style scenarios for keyword extraction.

#[cfg(feature = "tfidf")]
use chatrecap_keywords::{MONTHLY_TOP_K, TFIDF_TOP_K, TfIdfExtractor};
use chatrecap_keywords::{KeywordBackends, KeywordEngine, REPORT_LIMIT};
use chatrecap_report_types::KeywordLanguage;

// ── Scenario: pattern strategy only ──────────────────────────────────

#[test]
fn given_pattern_only_engine_when_text_is_blank_then_report_is_empty() {
    let report = KeywordEngine::pattern_only().corpus_keywords("   \n ");
    assert!(report.top_keywords.is_empty());
    assert_eq!(report.total_unique_keywords, 0);
}

#[test]
fn given_pattern_only_engine_when_scripts_are_mixed_then_languages_are_tagged() {
    let report = KeywordEngine::pattern_only().corpus_keywords("机器学习 机器学习 python python python");
    let python = report
        .top_keywords
        .iter()
        .find(|k| k.word == "python")
        .expect("latin keyword present");
    assert_eq!(python.language, KeywordLanguage::En);
    assert_eq!(python.frequency, 3);

    let cjk = report
        .top_keywords
        .iter()
        .find(|k| k.word == "机器学习")
        .expect("cjk keyword present");
    assert_eq!(cjk.language, KeywordLanguage::Zh);
    assert_eq!(cjk.frequency, 2);
}

#[test]
fn given_equal_counts_then_cjk_candidates_come_before_latin_ones() {
    let report = KeywordEngine::pattern_only().corpus_keywords("hello 你好");
    let words: Vec<&str> = report.top_keywords.iter().map(|k| k.word.as_str()).collect();
    assert_eq!(words, vec!["你好", "hello"]);
}

#[test]
fn given_many_distinct_words_then_report_is_truncated() {
    let mut text = String::new();
    for i in 0..25u32 {
        let latin = char::from_u32('a' as u32 + i).unwrap();
        let cjk = char::from_u32(0x4e00 + i).unwrap();
        text.push_str(&format!("zz{latin} {cjk}{cjk} "));
    }
    let report = KeywordEngine::pattern_only().corpus_keywords(&text);
    assert_eq!(report.top_keywords.len(), REPORT_LIMIT);
    assert_eq!(report.total_unique_keywords, 40);
}

// ── Scenario: short topics ───────────────────────────────────────────

#[test]
fn given_only_latin_text_when_pattern_only_then_topics_are_empty() {
    assert!(KeywordEngine::pattern_only().short_topics("just english words here").is_empty());
}

#[test]
fn given_cjk_text_then_at_most_three_topics_are_returned() {
    let topics = KeywordEngine::pattern_only().short_topics("数据 数据 数据 模型 模型 训练 推理 部署");
    assert_eq!(topics.len(), 3);
    assert_eq!(topics[0], "数据");
    assert_eq!(topics[1], "模型");
}

// ── Scenario: backend selection ──────────────────────────────────────

#[test]
fn given_no_backends_selected_then_none_are_active() {
    let engine = KeywordEngine::new(KeywordBackends::none());
    assert!(engine.active_backends().is_empty());
}

#[cfg(feature = "tokenizer")]
#[test]
fn given_tokenizer_backend_then_english_stop_words_never_surface() {
    let engine = KeywordEngine::new(KeywordBackends {
        tfidf: false,
        tokenizer: true,
    });
    let report = engine.corpus_keywords("the the the ownership and borrowing with lifetimes");
    assert!(report.top_keywords.iter().all(|k| k.word != "the" && k.word != "and"));
    assert!(report.top_keywords.iter().any(|k| k.word == "ownership"));
}

#[cfg(feature = "tokenizer")]
#[test]
fn given_tokenizer_finds_nothing_then_pattern_strategy_takes_over() {
    let engine = KeywordEngine::new(KeywordBackends {
        tfidf: false,
        tokenizer: true,
    });
    // Single ideographs and two-letter words are too short for the tokenizer.
    let report = engine.corpus_keywords("is an 项目 项目");
    assert_eq!(report.top_keywords.len(), 1);
    assert_eq!(report.top_keywords[0].word, "项目");
}

// ── Scenario: TF-IDF backend ─────────────────────────────────────────

#[cfg(feature = "tfidf")]
const CHINESE_TECH_TEXT: &str = "我们今天讨论机器学习和深度学习。机器学习需要大量数据，\
    深度学习需要神经网络。神经网络的训练需要算力，数据清洗也很重要。";

#[cfg(feature = "tfidf")]
fn tfidf_only() -> KeywordEngine {
    KeywordEngine::new(KeywordBackends {
        tfidf: true,
        tokenizer: false,
    })
}

#[cfg(feature = "tfidf")]
#[test]
fn given_tfidf_backend_then_entries_are_multi_character_zh_terms() {
    let report = tfidf_only().corpus_keywords(CHINESE_TECH_TEXT);
    assert!(!report.top_keywords.is_empty());
    for entry in &report.top_keywords {
        assert!(entry.word.chars().count() > 1, "single character kept: {}", entry.word);
        assert_eq!(entry.language, KeywordLanguage::Zh);
    }
}

#[cfg(feature = "tfidf")]
#[test]
fn given_tfidf_backend_then_frequency_is_weight_times_thousand_truncated() {
    let expected: Vec<(String, u64)> = TfIdfExtractor::new()
        .extract(CHINESE_TECH_TEXT, TFIDF_TOP_K)
        .into_iter()
        .filter(|(word, _)| word.chars().count() > 1)
        .map(|(word, weight)| (word, (weight * 1000.0) as u64))
        .collect();
    let mut sorted = expected.clone();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    let report = tfidf_only().corpus_keywords(CHINESE_TECH_TEXT);
    let actual: Vec<(String, u64)> = report
        .top_keywords
        .into_iter()
        .map(|k| (k.word, k.frequency))
        .collect();
    assert_eq!(actual, sorted);
}

#[cfg(feature = "tfidf")]
#[test]
fn given_tfidf_backend_when_topics_are_requested_then_tfidf_terms_win_over_cjk_runs() {
    let expected: Vec<String> = TfIdfExtractor::new()
        .extract(CHINESE_TECH_TEXT, MONTHLY_TOP_K)
        .into_iter()
        .map(|(word, _)| word)
        .filter(|word| word.chars().count() > 1)
        .collect();
    assert!(!expected.is_empty());

    assert_eq!(tfidf_only().short_topics(CHINESE_TECH_TEXT), expected);
}

#[cfg(all(feature = "tfidf", feature = "tokenizer"))]
#[test]
fn given_both_backends_produce_terms_then_results_are_merged() {
    let text = format!("{CHINESE_TECH_TEXT} ownership ownership borrowing");
    let report = KeywordEngine::new(KeywordBackends::default()).corpus_keywords(&text);

    assert!(
        report
            .top_keywords
            .iter()
            .any(|k| k.language == KeywordLanguage::Zh && k.word.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c)))
    );
    let ownership = report
        .top_keywords
        .iter()
        .find(|k| k.word == "ownership" && k.language == KeywordLanguage::En)
        .expect("tokenizer term present");
    assert_eq!(ownership.frequency, 2);
}
