use crate::models::ChecklistItem;

/// Checked flags for the packing list, one slot per [`ChecklistItem`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Checklist {
    checked: [bool; ChecklistItem::COUNT],
}

impl Checklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `item` and return its new state.
    pub fn toggle(&mut self, item: ChecklistItem) -> bool {
        let slot = &mut self.checked[item.index()];
        *slot = !*slot;
        *slot
    }

    pub fn is_checked(&self, item: ChecklistItem) -> bool {
        self.checked[item.index()]
    }

    pub fn checked_count(&self) -> usize {
        self.checked.iter().filter(|c| **c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_checklist_is_all_unchecked() {
        let c = Checklist::new();
        for item in ChecklistItem::ALL {
            assert!(!c.is_checked(item));
        }
        assert_eq!(c.checked_count(), 0);
    }

    #[test]
    fn test_toggle_power_bank() {
        let mut c = Checklist::new();
        assert!(c.toggle(ChecklistItem::PowerBank));
        assert!(c.is_checked(ChecklistItem::PowerBank));
        assert!(!c.toggle(ChecklistItem::PowerBank));
        assert!(!c.is_checked(ChecklistItem::PowerBank));
    }

    #[test]
    fn test_double_toggle_restores_each_item() {
        let mut c = Checklist::new();
        c.toggle(ChecklistItem::Camera);

        for item in ChecklistItem::ALL {
            let before = c.is_checked(item);
            c.toggle(item);
            c.toggle(item);
            assert_eq!(c.is_checked(item), before, "{:?}", item);
        }
    }

    #[test]
    fn test_toggle_leaves_other_items_alone() {
        let mut c = Checklist::new();
        c.toggle(ChecklistItem::Snacks);
        c.toggle(ChecklistItem::RainJacket);
        assert_eq!(c.checked_count(), 2);
        assert!(!c.is_checked(ChecklistItem::WaterBottle));
    }
}
