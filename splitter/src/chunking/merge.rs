//! Overlap-aware merging of small fragments into bounded chunks.

use std::collections::VecDeque;

use crate::config::SplitterConfig;

/// Joins adjacent fragments back into chunks of at most `chunk_size`.
///
/// Every fragment must already measure less than `chunk_size`. When a chunk is
/// closed, the next one starts with the longest run of trailing fragments
/// whose joined length stays within `chunk_overlap` and still leaves room for
/// the incoming fragment.
pub(crate) fn merge_fragments(
    fragments: &[&str],
    separator: &str,
    config: &SplitterConfig,
    out: &mut Vec<String>,
) {
    let separator_len = config.measure(separator);
    let mut window: VecDeque<(&str, usize)> = VecDeque::new();
    // Joined length of the window, separators included.
    let mut total = 0usize;

    for &fragment in fragments {
        let len = config.measure(fragment);

        if !window.is_empty() && total + separator_len + len > config.chunk_size() {
            push_chunk(&window, separator, config, out);

            if config.chunk_overlap() == 0 {
                window.clear();
                total = 0;
            }
            while let Some(&(_, front_len)) = window.front() {
                let within_overlap = total <= config.chunk_overlap();
                let leaves_room = total + separator_len + len <= config.chunk_size();
                if within_overlap && leaves_room {
                    break;
                }
                total -= front_len;
                if window.len() > 1 {
                    total -= separator_len;
                }
                window.pop_front();
            }
        }

        if !window.is_empty() {
            total += separator_len;
        }
        total += len;
        window.push_back((fragment, len));
    }

    if !window.is_empty() {
        push_chunk(&window, separator, config, out);
    }
}

/// Emits `text` as a chunk unless it is empty after optional trimming.
pub(crate) fn emit(text: &str, config: &SplitterConfig, out: &mut Vec<String>) {
    let text = if config.trim_chunks() { text.trim() } else { text };
    if !text.is_empty() {
        out.push(text.to_string());
    }
}

fn push_chunk(
    window: &VecDeque<(&str, usize)>,
    separator: &str,
    config: &SplitterConfig,
    out: &mut Vec<String>,
) {
    let joined = window
        .iter()
        .map(|(fragment, _)| *fragment)
        .collect::<Vec<_>>()
        .join(separator);
    emit(&joined, config, out);
}
