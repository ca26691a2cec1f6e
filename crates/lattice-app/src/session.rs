//! Restorable sessions in the page query string.
//!
//! Parameters read on load:
//!
//! | name                  | value                                    |
//! |-----------------------|------------------------------------------|
//! | `multiplicand` or `a` | multiplicand text                        |
//! | `multiplier` or `b`   | multiplier text                          |
//! | `mode`                | `one` or `all`                           |
//! | `step`                | 1-based step index                       |
//!
//! Share links are written as `<page>?a=..&b=..&mode=..[&step=..]`, with
//! `step` only in single-step mode.

use lattice_core::Operand;

use crate::playback::DisplayMode;

/// Raw text of an operand field together with its parsed value.
///
/// Invalid text is kept as typed; its value is `None` ("no value yet").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperandInput {
    text: String,
    value: Option<Operand>,
}

impl OperandInput {
    /// Wraps typed text, parsing it strictly.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let value = text.parse().ok();
        Self { text, value }
    }

    /// Returns the text as typed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the parsed operand, if the text is a positive integer.
    #[must_use]
    pub fn value(&self) -> Option<Operand> {
        self.value
    }
}

impl From<Operand> for OperandInput {
    fn from(operand: Operand) -> Self {
        Self {
            text: operand.to_string(),
            value: Some(operand),
        }
    }
}

/// Session state decoded from a query string.
///
/// Absent or unrecognized parameters are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionParams {
    /// The multiplicand field.
    pub multiplicand: Option<OperandInput>,
    /// The multiplier field.
    pub multiplier: Option<OperandInput>,
    /// The display mode.
    pub mode: Option<DisplayMode>,
    /// The 0-based step index. Whether it is in range is decided by the
    /// lesson it is applied to.
    pub step: Option<usize>,
}

impl SessionParams {
    /// Parses a query string, with or without the leading `?`.
    ///
    /// Also accepts a full URL, in which case everything up to the first `?`
    /// is skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use lattice_app::{playback::DisplayMode, session::SessionParams};
    ///
    /// let params = SessionParams::parse("https://example.com/?b=12&a=321&mode=one&step=4");
    /// assert_eq!(params.multiplicand.unwrap().text(), "321");
    /// assert_eq!(params.mode, Some(DisplayMode::SingleStep));
    /// assert_eq!(params.step, Some(3));
    /// ```
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.split_once('?').map_or(query, |(_, query)| query);
        let query = query.split_once('#').map_or(query, |(query, _)| query);
        let pairs: Vec<(String, String)> = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(name), decode_component(value))
            })
            .collect();
        let first = |name: &str| {
            pairs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, value)| value.as_str())
        };

        let multiplicand = first("multiplicand")
            .or_else(|| first("a"))
            .map(OperandInput::new);
        let multiplier = first("multiplier")
            .or_else(|| first("b"))
            .map(OperandInput::new);

        let mode = first("mode").and_then(|value| match value.parse() {
            Ok(mode) => Some(mode),
            Err(err) => {
                log::warn!("ignoring mode parameter: {err}");
                None
            }
        });

        let step = first("step").and_then(|value| {
            match value.trim().parse::<usize>().ok().and_then(|step| step.checked_sub(1)) {
                Some(step) => Some(step),
                None => {
                    log::warn!("ignoring step parameter: {value:?}");
                    None
                }
            }
        });

        Self {
            multiplicand,
            multiplier,
            mode,
            step,
        }
    }
}

/// Builds a share link.
///
/// Any query string or fragment already on `base_url` is replaced. `index` is
/// the 0-based step index and is written only in single-step mode.
///
/// # Examples
///
/// ```
/// use lattice_app::{playback::DisplayMode, session};
/// use lattice_core::Operand;
///
/// let (a, b) = (Operand::try_from(321)?, Operand::try_from(12)?);
/// assert_eq!(
///     session::share_url("https://example.com/lattice/", a, b, DisplayMode::SingleStep, 3),
///     "https://example.com/lattice/?a=321&b=12&mode=one&step=4",
/// );
/// assert_eq!(
///     session::share_url("https://example.com/?a=1", a, b, DisplayMode::AllSteps, 3),
///     "https://example.com/?a=321&b=12&mode=all",
/// );
/// # Ok::<(), lattice_core::OperandError>(())
/// ```
#[must_use]
pub fn share_url(
    base_url: &str,
    multiplicand: Operand,
    multiplier: Operand,
    mode: DisplayMode,
    index: usize,
) -> String {
    let page = base_url
        .split_once(['?', '#'])
        .map_or(base_url, |(page, _)| page);
    let mut url = format!("{page}?a={multiplicand}&b={multiplier}&mode={mode}");
    if mode.is_single_step() {
        url.push_str(&format!("&step={}", index + 1));
    }
    url
}

/// Decodes `+` and `%XX` escapes; malformed escapes are kept verbatim.
fn decode_component(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' => match s.get(i + 1..i + 3).and_then(|hex| u8::from_str_radix(hex, 16).ok()) {
                Some(byte) => {
                    out.push(byte);
                    i += 2;
                }
                None => out.push(b'%'),
            },
            byte => out.push(byte),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn operand(value: u64) -> Operand {
        Operand::new(value).unwrap()
    }

    #[test]
    fn test_operand_input() {
        let input = OperandInput::new("12a");
        assert_eq!(input.text(), "12a");
        assert_eq!(input.value(), None);
        assert_eq!(OperandInput::new(" 42 ").value(), Some(operand(42)));
        assert_eq!(OperandInput::from(operand(7)).text(), "7");
    }

    #[test]
    fn test_long_names_win_over_short_names() {
        let params = SessionParams::parse("a=1&multiplicand=2&b=3&multiplier=4");
        assert_eq!(params.multiplicand.and_then(|i| i.value()), Some(operand(2)));
        assert_eq!(params.multiplier.and_then(|i| i.value()), Some(operand(4)));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let params = SessionParams::parse("?a=5&a=6&step=2&step=9");
        assert_eq!(params.multiplicand.and_then(|i| i.value()), Some(operand(5)));
        assert_eq!(params.step, Some(1));
    }

    #[test]
    fn test_invalid_values_are_ignored_or_kept_as_text() {
        let params = SessionParams::parse("a=abc&b=&mode=some&step=0");
        let multiplicand = params.multiplicand.unwrap();
        assert_eq!(multiplicand.text(), "abc");
        assert_eq!(multiplicand.value(), None);
        assert_eq!(params.multiplier.unwrap().value(), None);
        assert_eq!(params.mode, None);
        assert_eq!(params.step, None);

        assert_eq!(SessionParams::parse("step=-3").step, None);
        assert_eq!(SessionParams::parse("step=x").step, None);
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(SessionParams::parse(""), SessionParams::default());
        assert_eq!(SessionParams::parse("?"), SessionParams::default());
        assert_eq!(
            SessionParams::parse("https://example.com/page"),
            SessionParams::default()
        );
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(decode_component("%31%32"), "12");
        assert_eq!(decode_component("a+b"), "a b");
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
        let params = SessionParams::parse("a=%2012&mode=%61ll#top");
        assert_eq!(params.multiplicand.and_then(|i| i.value()), Some(operand(12)));
        assert_eq!(params.mode, Some(DisplayMode::AllSteps));
    }

    #[test]
    fn test_share_url_without_query() {
        assert_eq!(
            share_url("page", operand(9), operand(8), DisplayMode::SingleStep, 0),
            "page?a=9&b=8&mode=one&step=1"
        );
    }

    proptest! {
        #[test]
        fn share_url_round_trips(
            a in 1_u64..=u64::MAX,
            b in 1_u64..=u64::MAX,
            all_steps: bool,
            index in 0_usize..10_000,
        ) {
            let mode = if all_steps { DisplayMode::AllSteps } else { DisplayMode::SingleStep };
            let url = share_url("https://example.com/app/", operand(a), operand(b), mode, index);
            let params = SessionParams::parse(&url);
            prop_assert_eq!(params.multiplicand.and_then(|i| i.value()), Some(operand(a)));
            prop_assert_eq!(params.multiplier.and_then(|i| i.value()), Some(operand(b)));
            prop_assert_eq!(params.mode, Some(mode));
            prop_assert_eq!(params.step, mode.is_single_step().then_some(index));
        }
    }
}
