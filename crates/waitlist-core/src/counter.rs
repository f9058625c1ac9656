//! Optimistic Counters
//!
//! After a successful signup every on-page count that is written with a
//! thousands separator goes up by one. This is cosmetic: the displays are not
//! synchronised with each other or with the relay, and a page reload shows
//! whatever the markup says again.

const SEPARATOR: char = ',';

/// A numeric text display on the page
pub trait CounterDisplay {
    fn text(&self) -> String;

    fn set_text(&self, text: &str);
}

/// Bump every display whose text carries a thousands separator.
///
/// Returns how many displays changed.
pub fn bump_displays<D>(displays: &[D]) -> usize
where
    D: AsRef<dyn CounterDisplay>,
{
    let mut bumped = 0;
    for display in displays {
        let display = display.as_ref();
        if let Some(next) = bump_text(&display.text()) {
            display.set_text(&next);
            bumped += 1;
        }
    }
    bumped
}

/// Increment the grouped number inside `text`.
///
/// Text without a `,` is left alone (`None`). Text around the number is
/// kept as is: `"10,000+"` becomes `"10,001+"`.
pub fn bump_text(text: &str) -> Option<String> {
    if !text.contains(SEPARATOR) {
        return None;
    }

    let start = text.find(|c: char| c.is_ascii_digit())?;
    let len = text[start..]
        .find(|c: char| !(c.is_ascii_digit() || c == SEPARATOR))
        .unwrap_or(text.len() - start);
    let run = text[start..start + len].trim_end_matches(SEPARATOR);

    let digits: String = run.chars().filter(char::is_ascii_digit).collect();
    let value: u64 = digits.parse().ok()?;
    let next = value.checked_add(1)?;

    Some(format!(
        "{}{}{}",
        &text[..start],
        group_thousands(next),
        &text[start + run.len()..]
    ))
}

/// Format with `,` every three digits (en-US grouping)
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(SEPARATOR);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    struct TextCell(RefCell<String>);

    impl CounterDisplay for TextCell {
        fn text(&self) -> String {
            self.0.borrow().clone()
        }

        fn set_text(&self, text: &str) {
            *self.0.borrow_mut() = text.to_string();
        }
    }

    fn cell(text: &str) -> Rc<dyn CounterDisplay> {
        Rc::new(TextCell(RefCell::new(text.into())))
    }

    #[test]
    fn test_bump_grouped_number() {
        assert_eq!(bump_text("1,234").as_deref(), Some("1,235"));
        assert_eq!(bump_text("9,999").as_deref(), Some("10,000"));
        assert_eq!(bump_text("1,234,567").as_deref(), Some("1,234,568"));
    }

    #[test]
    fn test_ungrouped_left_alone() {
        assert_eq!(bump_text("1234"), None);
        assert_eq!(bump_text("98%"), None);
        assert_eq!(bump_text(""), None);
    }

    #[test]
    fn test_surrounding_text_kept() {
        assert_eq!(bump_text("10,000+").as_deref(), Some("10,001+"));
        assert_eq!(bump_text("~2,500 members").as_deref(), Some("~2,501 members"));
        assert_eq!(
            bump_text("Over 1,000, and counting").as_deref(),
            Some("Over 1,001, and counting")
        );
    }

    #[test]
    fn test_separator_without_digits() {
        assert_eq!(bump_text("fast, private"), None);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(12_345_678), "12,345,678");
    }

    #[test]
    fn test_bump_displays_independently() {
        let displays = vec![cell("1,234"), cell("1234"), cell("2,000")];
        assert_eq!(bump_displays(&displays), 2);

        let texts: Vec<_> = displays.iter().map(|d| d.text()).collect();
        assert_eq!(texts, ["1,235", "1234", "2,001"]);
    }
}
