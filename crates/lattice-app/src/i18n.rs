//! Message lookup.
//!
//! Translation itself lives outside the app; [`Translator`] is the seam. The
//! built-in [`EnglishCatalog`] is used when no other translator is supplied
//! and as the fallback for keys a translator does not know.

use lattice_lesson::Narration;

/// Looks up a message by key and fills in its `{{name}}` placeholders.
pub trait Translator {
    /// Returns the message for `key`, or `None` if the key is unknown.
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Returns the message for `key` with `vars` interpolated.
    ///
    /// Unknown keys fall back to the English catalog, and then to the key
    /// itself.
    fn t(&self, key: &str, vars: &[(&str, String)]) -> String {
        let template = self
            .lookup(key)
            .or_else(|| english(key))
            .unwrap_or(key);
        interpolate(template, vars)
    }

    /// Renders a narration.
    fn narrate(&self, narration: &Narration) -> String {
        let vars: Vec<(&str, String)> = narration
            .vars
            .iter()
            .map(|(name, value)| (*name, value.clone()))
            .collect();
        self.t(narration.key.as_str(), &vars)
    }
}

const ENGLISH: &[(&str, &str)] = &[
    ("multiply", "Multiply"),
    ("multiplicandPlaceholder", "Multiplicand"),
    ("multiplierPlaceholder", "Multiplier"),
    ("randomize", "Randomize"),
    ("step", "Step {{number}}"),
    ("makeSpace", "Make some space to work."),
    (
        "writeMultiplicand",
        "Write the multiplicand, {{multiplicand}}, along the top.",
    ),
    (
        "writeMultiplier",
        "Write the multiplier, {{multiplier}}, down the right side.",
    ),
    (
        "drawGrid",
        "Draw a grid with {{columns}} columns for {{multiplicand}} and {{rows}} rows for {{multiplier}}, and split each cell with a diagonal.",
    ),
    (
        "multiplyDigits",
        "Multiply the digits and write the product in the cell, tens above the diagonal: {{left}} × {{right}} = {{product}}",
    ),
    (
        "addDiagonalDigits",
        "Add the digits along the diagonal, carrying into the next one: {{addends}} = {{sum}}",
    ),
    (
        "writeSolution",
        "Read the answer around the left and bottom edges: {{solution}}",
    ),
    ("showAllSteps", "Show All Steps"),
    ("showOneStep", "Show One Step"),
    ("share", "Share"),
    ("reset", "Reset"),
    ("previous", "Previous"),
    ("play", "Play"),
    ("pause", "Pause"),
    ("next", "Next"),
    ("jumpToLastStep", "Jump to last step"),
];

/// The built-in English messages.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishCatalog;

impl Translator for EnglishCatalog {
    fn lookup(&self, key: &str) -> Option<&str> {
        english(key)
    }
}

fn english(key: &str) -> Option<&'static str> {
    ENGLISH
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, message)| *message)
}

/// Replaces each `{{name}}` in `template` with the value of `name`.
///
/// Placeholders without a value are left in place.
///
/// ```
/// use lattice_app::i18n::interpolate;
///
/// let vars = [("sum", "12".to_owned())];
/// assert_eq!(interpolate("= {{sum}} {{carry}}", &vars), "= 12 {{carry}}");
/// ```
#[must_use]
pub fn interpolate(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let name = after[..end].trim();
        match vars.iter().find(|(n, _)| *n == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use lattice_lesson::MessageKey;

    use super::*;

    struct French;

    impl Translator for French {
        fn lookup(&self, key: &str) -> Option<&str> {
            (key == "step").then_some("Étape {{number}}")
        }
    }

    #[test]
    fn test_every_message_key_has_english_text() {
        for key in MessageKey::ALL {
            assert!(EnglishCatalog.lookup(key.as_str()).is_some(), "{key}");
        }
    }

    #[test]
    fn test_interpolate() {
        let vars = [("a", "1".to_owned()), ("b", "2".to_owned())];
        assert_eq!(interpolate("{{a}} + {{ b }} = 3", &vars), "1 + 2 = 3");
        assert_eq!(interpolate("no placeholders", &vars), "no placeholders");
        assert_eq!(interpolate("open {{a", &vars), "open {{a");
        assert_eq!(interpolate("{{c}}{{a}}", &vars), "{{c}}1");
    }

    #[test]
    fn test_translator_falls_back_to_english_then_key() {
        let step = Narration::step_label(2);
        assert_eq!(French.narrate(&step), "Étape 3");
        assert_eq!(EnglishCatalog.narrate(&step), "Step 3");
        assert_eq!(
            French.t("writeMultiplier", &[("multiplier", "12".to_owned())]),
            "Write the multiplier, 12, down the right side."
        );
        assert_eq!(French.t("unknownKey", &[]), "unknownKey");
    }
}
