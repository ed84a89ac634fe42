use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("archive file not found") {
        push_hint(&mut out, "Check the input path; the default is `conversation.json`.");
        push_hint(
            &mut out,
            "Pass the archive explicitly: `chatrecap path/to/conversations.json`.",
        );
    }

    if haystack.contains("as json") || haystack.contains("must be a json array") {
        push_hint(
            &mut out,
            "Use the `conversations.json` file from the chat export, unmodified.",
        );
        push_hint(
            &mut out,
            "Validate the file with a JSON linter; the top level must be an array.",
        );
    }

    if haystack.contains("invalid utc offset") {
        push_hint(
            &mut out,
            "Offsets look like `--utc-offset +08:00`, `--utc-offset -05:00`, `UTC`, or `local`.",
        );
    }

    if haystack.contains("config file") {
        push_hint(
            &mut out,
            "Check `chatrecap.toml` syntax; known keys are input, output, utc_offset, pretty, [backends].",
        );
    }

    if haystack.contains("failed to write report") {
        push_hint(&mut out, "Make sure the output directory exists and is writable.");
        push_hint(&mut out, "Use `--stdout` to print the report instead.");
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
