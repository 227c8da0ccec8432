pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Rows skipped by PageUp/PageDown.
pub const PAGE_STEP: usize = 5;

/// Moves a list selection for the usual navigation keys without wrapping.
/// Returns `None` when `key` is not a navigation key.
pub fn scroll_selection(
    key: crossterm::event::KeyCode,
    index: usize,
    len: usize,
) -> Option<usize> {
    use crossterm::event::KeyCode;

    if len == 0 {
        return match key {
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown | KeyCode::Home
            | KeyCode::End => Some(0),
            _ => None,
        };
    }

    let last = len - 1;
    let next = match key {
        KeyCode::Up => index.saturating_sub(1),
        KeyCode::Down => {
            if index < last {
                index + 1
            } else {
                last
            }
        }
        KeyCode::PageUp => index.saturating_sub(PAGE_STEP),
        KeyCode::PageDown => {
            if index + PAGE_STEP < last {
                index + PAGE_STEP
            } else {
                last
            }
        }
        KeyCode::Home => 0,
        KeyCode::End => last,
        _ => return None,
    };

    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn wrapping_moves() {
        assert_eq!(wrap_increment(2, 3), 0);
        assert_eq!(wrap_decrement(0, 3), 2);
        assert_eq!(wrap_increment(0, 0), 0);
        assert_eq!(wrap_decrement(0, 0), 0);
    }

    #[test]
    fn scrolling_clamps_at_both_ends() {
        assert_eq!(scroll_selection(KeyCode::Up, 0, 10), Some(0));
        assert_eq!(scroll_selection(KeyCode::Down, 9, 10), Some(9));
        assert_eq!(scroll_selection(KeyCode::Down, 3, 10), Some(4));
        assert_eq!(scroll_selection(KeyCode::PageDown, 7, 10), Some(9));
        assert_eq!(scroll_selection(KeyCode::PageUp, 7, 10), Some(2));
        assert_eq!(scroll_selection(KeyCode::End, 0, 10), Some(9));
        assert_eq!(scroll_selection(KeyCode::Home, 6, 10), Some(0));
        assert_eq!(scroll_selection(KeyCode::Down, 0, 0), Some(0));
        assert_eq!(scroll_selection(KeyCode::Enter, 4, 10), None);
    }
}
