use std::collections::VecDeque;

use crate::model::Achievement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastState {
    Idle,
    Visible(Achievement),
    Leaving(Achievement),
}

/// Strict FIFO for achievement toasts: one visible at a time, display order
/// equals unlock order. The controller drives the timed transitions.
#[derive(Debug)]
pub struct ToastQueue {
    pending: VecDeque<Achievement>,
    state: ToastState,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            state: ToastState::Idle,
        }
    }

    /// Enqueues a toast. Returns the toast to display now if the queue was
    /// idle; otherwise it waits its turn.
    pub fn push(&mut self, achievement: Achievement) -> Option<Achievement> {
        match self.state {
            ToastState::Idle => {
                self.state = ToastState::Visible(achievement);
                Some(achievement)
            }
            _ => {
                self.pending.push_back(achievement);
                None
            }
        }
    }

    /// Visible -> Leaving. Returns the toast that starts its exit transition.
    pub fn begin_exit(&mut self) -> Option<Achievement> {
        match self.state {
            ToastState::Visible(achievement) => {
                self.state = ToastState::Leaving(achievement);
                Some(achievement)
            }
            _ => None,
        }
    }

    /// Leaving -> Idle or Visible. Returns the dismissed toast and, if one
    /// was waiting, the next toast to display.
    pub fn finish_exit(&mut self) -> (Option<Achievement>, Option<Achievement>) {
        match self.state {
            ToastState::Leaving(dismissed) => {
                let next = self.pending.pop_front();
                self.state = match next {
                    Some(achievement) => ToastState::Visible(achievement),
                    None => ToastState::Idle,
                };
                (Some(dismissed), next)
            }
            _ => (None, None),
        }
    }

    /// The toast currently on screen, if any.
    pub fn head(&self) -> Option<Achievement> {
        match self.state {
            ToastState::Visible(achievement) | ToastState::Leaving(achievement) => {
                Some(achievement)
            }
            ToastState::Idle => None,
        }
    }

    pub fn state(&self) -> ToastState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CATALOG;

    #[test]
    fn test_first_push_displays_immediately() {
        let mut queue = ToastQueue::new();
        assert_eq!(queue.push(CATALOG[0]), Some(CATALOG[0]));
        assert_eq!(queue.head(), Some(CATALOG[0]));
    }

    #[test]
    fn test_later_pushes_wait_their_turn() {
        let mut queue = ToastQueue::new();
        assert!(queue.push(CATALOG[0]).is_some());
        assert!(queue.push(CATALOG[3]).is_none());
        assert!(queue.push(CATALOG[4]).is_none());

        // still showing the first toast
        assert_eq!(queue.head(), Some(CATALOG[0]));

        assert_eq!(queue.begin_exit(), Some(CATALOG[0]));
        let (dismissed, next) = queue.finish_exit();
        assert_eq!(dismissed, Some(CATALOG[0]));
        assert_eq!(next, Some(CATALOG[3]));

        assert_eq!(queue.begin_exit(), Some(CATALOG[3]));
        let (dismissed, next) = queue.finish_exit();
        assert_eq!(dismissed, Some(CATALOG[3]));
        assert_eq!(next, Some(CATALOG[4]));

        assert_eq!(queue.begin_exit(), Some(CATALOG[4]));
        let (dismissed, next) = queue.finish_exit();
        assert_eq!(dismissed, Some(CATALOG[4]));
        assert_eq!(next, None);
        assert_eq!(queue.state(), ToastState::Idle);
    }

    #[test]
    fn test_transitions_are_guarded() {
        let mut queue = ToastQueue::new();
        assert_eq!(queue.begin_exit(), None);
        assert_eq!(queue.finish_exit(), (None, None));

        queue.push(CATALOG[1]);
        // cannot finish an exit that never began
        assert_eq!(queue.finish_exit(), (None, None));
        assert_eq!(queue.head(), Some(CATALOG[1]));
    }
}
