use std::time::Duration;

/// Where an activation came from. Cards live far from the form, so picking
/// one also brings the form into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Card,
    List,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOutcome {
    /// New value for the form's program field.
    pub value: String,
    /// Index of the only list selector marked active.
    pub active_index: usize,
    pub scroll_to_form: bool,
    pub highlight_for: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    values: Vec<String>,
    active: Option<usize>,
    highlight: Duration,
}

impl Selection {
    pub fn new<I, S>(values: I, highlight: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            active: None,
            highlight,
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn active_value(&self) -> Option<&str> {
        self.active.map(|i| self.values[i].as_str())
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Applies a `data-value` read from a card or list item. Missing or
    /// unknown values leave the selection untouched.
    pub fn activate(&mut self, raw: Option<&str>, origin: Origin) -> Option<SelectionOutcome> {
        let raw = raw?.trim();
        let index = self.values.iter().position(|v| v == raw)?;
        self.active = Some(index);

        let from_card = origin == Origin::Card;
        Some(SelectionOutcome {
            value: self.values[index].clone(),
            active_index: index,
            scroll_to_form: from_card,
            highlight_for: from_card.then_some(self.highlight),
        })
    }

    /// Keeps the list selectors in step when the visitor edits the form's own
    /// select directly.
    pub fn sync_from_field(&mut self, field_value: &str) {
        self.active = self.values.iter().position(|v| v == field_value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> Selection {
        Selection::new(["foundation", "performance", "elite"], Duration::from_millis(1_500))
    }

    #[test]
    fn every_valid_value_marks_exactly_one_selector() {
        let mut sel = selection();
        for (i, v) in ["foundation", "performance", "elite"].iter().enumerate() {
            let outcome = sel.activate(Some(*v), Origin::List).unwrap();
            assert_eq!(outcome.value, *v);
            assert_eq!(outcome.active_index, i);
            assert_eq!(sel.active_value(), Some(*v));

            let active: Vec<_> = (0..sel.values().len()).filter(|&j| sel.is_active(j)).collect();
            assert_eq!(active, vec![i]);
        }
    }

    #[test]
    fn card_activation_scrolls_and_highlights() {
        let mut sel = selection();
        let outcome = sel.activate(Some("elite"), Origin::Card).unwrap();
        assert!(outcome.scroll_to_form);
        assert_eq!(outcome.highlight_for, Some(Duration::from_millis(1_500)));

        let outcome = sel.activate(Some("foundation"), Origin::List).unwrap();
        assert!(!outcome.scroll_to_form);
        assert_eq!(outcome.highlight_for, None);
    }

    #[test]
    fn missing_or_unknown_value_is_a_no_op() {
        let mut sel = selection();
        sel.activate(Some("performance"), Origin::Card);

        assert_eq!(sel.activate(None, Origin::Card), None);
        assert_eq!(sel.activate(Some(""), Origin::List), None);
        assert_eq!(sel.activate(Some("platinum"), Origin::Card), None);
        assert_eq!(sel.active_value(), Some("performance"));
    }

    #[test]
    fn editing_the_field_directly_moves_the_active_marker() {
        let mut sel = selection();
        sel.activate(Some("elite"), Origin::List);
        sel.sync_from_field("foundation");
        assert_eq!(sel.active_value(), Some("foundation"));
        sel.sync_from_field("");
        assert_eq!(sel.active_value(), None);
    }
}
