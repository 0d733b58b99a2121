//! Phrase template rendering for numbered renames.
//!
//! Placeholders are written `%key%`. Substitution is purely textual; there is
//! no escaping and unknown keys are left as-is.

pub struct TemplateVars;

impl TemplateVars {
    /// Position of the file within its folder.
    pub const FILE_INDEX: &'static str = "i";
    /// Position of the folder within the run.
    pub const FOLDER_INDEX: &'static str = "j";
}

fn placeholder(key: &str) -> String {
    format!("%{}%", key)
}

pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        result = result.replace(&placeholder(key), value);
    }

    result
}

pub fn is_present(template: &str, key: &str) -> bool {
    template.contains(&placeholder(key))
}

/// Zero-fill `value` to at least `width` digits. Wider values are not truncated.
pub fn pad_number(value: usize, width: usize) -> String {
    format!("{:0width$}", value, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_replaces_every_occurrence() {
        let out = render("s%i%e%i%", &[(TemplateVars::FILE_INDEX, "03")]);
        assert_eq!(out, "s03e03");
    }

    #[test]
    fn render_handles_both_keys_independently() {
        let out = render(
            "S%j%E%i%",
            &[
                (TemplateVars::FILE_INDEX, "07"),
                (TemplateVars::FOLDER_INDEX, "02"),
            ],
        );
        assert_eq!(out, "S02E07");
    }

    #[test]
    fn render_leaves_unknown_and_partial_tokens() {
        let out = render("%k% %i %i%", &[(TemplateVars::FILE_INDEX, "1")]);
        assert_eq!(out, "%k% %i 1");
    }

    #[test]
    fn is_present_detects_placeholder() {
        assert!(is_present("ep%i%", TemplateVars::FILE_INDEX));
        assert!(!is_present("ep%i%", TemplateVars::FOLDER_INDEX));
        assert!(!is_present("ep i", TemplateVars::FILE_INDEX));
    }

    #[test]
    fn pad_number_fills_and_overflows() {
        assert_eq!(pad_number(1, 2), "01");
        assert_eq!(pad_number(7, 3), "007");
        assert_eq!(pad_number(123, 2), "123");
        assert_eq!(pad_number(5, 0), "5");
    }
}
