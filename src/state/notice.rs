/// Visibility of the transient "saved" banner. Every `shown` bumps the
/// generation so the dismiss timer restarts even while already visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub visible: bool,
    pub generation: u32,
}

impl NoticeState {
    pub fn shown(self) -> Self {
        Self {
            visible: true,
            generation: self.generation.wrapping_add(1),
        }
    }

    pub fn dismissed(self) -> Self {
        Self {
            visible: false,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_show_changes_the_timer_key() {
        let first = NoticeState::default().shown();
        let second = first.shown();
        assert!(first.visible && second.visible);
        assert_ne!(first, second);
    }

    #[test]
    fn dismiss_keeps_generation() {
        let shown = NoticeState::default().shown();
        let hidden = shown.dismissed();
        assert!(!hidden.visible);
        assert_eq!(hidden.generation, shown.generation);
    }
}
