//! Download file naming for uploaded matrices.

/// Name used when the upload carries no usable file name.
pub const DEFAULT_RESULT_FILE_NAME: &str = "output.csv";

/// Reduces an uploaded file name to a safe bare name.
///
/// Directory components are dropped (both `/` and `\` separators) and only
/// ASCII alphanumerics, `.`, `_` and `-` are kept. Leading dots are removed
/// so the result is never hidden or a relative path.
pub fn sanitize_file_name(raw: &str) -> Option<String> {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Returns `<stem>-result.csv` for an uploaded file, or `output.csv`.
pub fn result_file_name(upload: Option<&str>) -> String {
    let Some(name) = upload.and_then(sanitize_file_name) else {
        return DEFAULT_RESULT_FILE_NAME.to_string();
    };
    let stem = match name.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => name.as_str(),
    };
    format!("{}-result.csv", stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_plain_names() {
        assert_eq!(sanitize_file_name("data.csv").as_deref(), Some("data.csv"));
    }

    #[test]
    fn strips_directories() {
        assert_eq!(
            sanitize_file_name("../../etc/passwd").as_deref(),
            Some("passwd")
        );
        assert_eq!(
            sanitize_file_name(r"C:\Users\me\phones.csv").as_deref(),
            Some("phones.csv")
        );
    }

    #[test]
    fn drops_unsafe_characters_and_leading_dots() {
        assert_eq!(
            sanitize_file_name("my data (v2).csv").as_deref(),
            Some("mydatav2.csv")
        );
        assert_eq!(sanitize_file_name(".env").as_deref(), Some("env"));
        assert_eq!(sanitize_file_name("..."), None);
        assert_eq!(sanitize_file_name(""), None);
    }

    #[test]
    fn result_name_replaces_extension() {
        assert_eq!(result_file_name(Some("phones.csv")), "phones-result.csv");
        assert_eq!(result_file_name(Some("matrix")), "matrix-result.csv");
        assert_eq!(result_file_name(Some("a.b.csv")), "a.b-result.csv");
    }

    #[test]
    fn result_name_falls_back_to_default() {
        assert_eq!(result_file_name(None), "output.csv");
        assert_eq!(result_file_name(Some("///")), "output.csv");
    }
}
