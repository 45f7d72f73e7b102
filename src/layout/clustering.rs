//! Distance-based clustering for text layout analysis.
//!
//! Groups characters into words and words into lines by proximity, used
//! by the row/column grouping stage of plain-text assembly.

use crate::layout::text_block::{TextBlock, TextChar, TextSpan, WritingMode};

/// Cluster characters into words using spatial DBSCAN.
///
/// Checks ALL characters within epsilon distance, not just consecutive ones,
/// which avoids word segmentation issues where characters are out of order
/// in the input array.
///
/// # Arguments
///
/// * `chars` - The characters to cluster
/// * `epsilon` - The maximum distance between characters in the same word
///
/// # Returns
///
/// A vector of clusters, where each cluster is a vector of character indices.
///
/// # Examples
///
/// ```
/// use pdf_oxide::geometry::Rect;
/// use pdf_oxide::layout::{TextChar, FontWeight, Color, clustering::cluster_chars_into_words};
///
/// let chars = vec![
///     TextChar {
///         char: 'H',
///         bbox: Rect::new(0.0, 0.0, 10.0, 12.0),
///         font_name: "Times".to_string(),
///         font_size: 12.0,
///         font_weight: FontWeight::Normal,
///         color: Color::black(),
///         mcid: None,
///     },
///     TextChar {
///         char: 'i',
///         bbox: Rect::new(11.0, 0.0, 5.0, 12.0),
///         font_name: "Times".to_string(),
///         font_size: 12.0,
///         font_weight: FontWeight::Normal,
///         color: Color::black(),
///         mcid: None,
///     },
/// ];
///
/// let clusters = cluster_chars_into_words(&chars, 3.0);
/// // Characters within 3.0 units are grouped together
/// ```
pub fn cluster_chars_into_words(chars: &[TextChar], epsilon: f32) -> Vec<Vec<usize>> {
    if chars.is_empty() {
        return vec![];
    }

    if chars.len() == 1 {
        return vec![vec![0]];
    }

    // True spatial DBSCAN: check ALL characters within epsilon distance
    let mut visited = vec![false; chars.len()];
    let mut clusters: Vec<Vec<usize>> = vec![];

    for i in 0..chars.len() {
        if visited[i] {
            continue;
        }

        let mut cluster = vec![i];
        visited[i] = true;

        // BFS to find all connected characters
        let mut j = 0;
        while j < cluster.len() {
            let current_idx = cluster[j];
            let current = &chars[current_idx];
            let current_center = current.bbox.center();

            // Check ALL unvisited characters (not just consecutive ones!)
            for k in 0..chars.len() {
                if visited[k] {
                    continue;
                }

                let other = &chars[k];
                let other_center = other.bbox.center();

                let dx = (current_center.x - other_center.x).abs();
                let dy = (current_center.y - other_center.y).abs();

                // Word boundary heuristic: same line + close horizontally.
                // Font size (not a fixed epsilon) sets vertical tolerance.
                let same_line = dy < current.font_size * 0.5;
                let close_horiz = dx <= epsilon;

                if same_line && close_horiz {
                    cluster.push(k);
                    visited[k] = true;
                }
            }

            j += 1;
        }

        // Sort cluster by X position (left-to-right)
        cluster.sort_by(|&a, &b| chars[a].bbox.x.partial_cmp(&chars[b].bbox.x).unwrap());
        clusters.push(cluster);
    }

    clusters
}

/// Cluster words into lines using column-aware Y-coordinate grouping.
///
/// Groups words that have similar Y coordinates AND are horizontally
/// connected, avoiding mixing words from different columns.
pub fn cluster_words_into_lines(words: &[TextBlock], epsilon_y: f32) -> Vec<Vec<usize>> {
    if words.is_empty() {
        return vec![];
    }

    let mut clusters: Vec<Vec<usize>> = vec![];
    let mut assigned = vec![false; words.len()];

    // Estimate column gap threshold: if two words are more than 50pt apart horizontally,
    // they're likely in different columns
    let column_gap_threshold = 50.0;

    for i in 0..words.len() {
        if assigned[i] {
            continue;
        }

        let mut cluster = vec![i];
        assigned[i] = true;

        // Use BFS to find horizontally connected words at the same Y
        let mut j = 0;
        while j < cluster.len() {
            let current_idx = cluster[j];
            let current_word = &words[current_idx];

            // Check all unassigned words
            for k in 0..words.len() {
                if assigned[k] {
                    continue;
                }

                let other_word = &words[k];

                // Check if on same line (Y coordinate)
                let y_dist = (current_word.bbox.y - other_word.bbox.y).abs();
                if y_dist > epsilon_y {
                    continue;
                }

                // Check if horizontally connected (not across column gap)
                let x_dist = (current_word.bbox.right() - other_word.bbox.left())
                    .abs()
                    .min((other_word.bbox.right() - current_word.bbox.left()).abs());

                // Words are in the same line if they're close horizontally
                // (within column gap threshold)
                if x_dist < column_gap_threshold {
                    cluster.push(k);
                    assigned[k] = true;
                }
            }

            j += 1;
        }

        // Sort by x-coordinate
        cluster.sort_by(|&a, &b| words[a].bbox.x.partial_cmp(&words[b].bbox.x).unwrap());

        clusters.push(cluster);
    }

    clusters
}

/// Group text spans into rows by Y-coordinate proximity (§4.10's
/// `GetTextByRow`).
///
/// Two spans land in the same row when their Y centers differ by less than
/// the taller span's height; rows are returned top-to-bottom (Y descending,
/// matching PDF's bottom-left origin convention used throughout reading
/// order), each row sorted left-to-right (X ascending).
pub fn group_spans_by_row(mut spans: Vec<TextSpan>) -> Vec<Vec<TextSpan>> {
    if spans.is_empty() {
        return vec![];
    }
    spans.sort_by(|a, b| b.bbox.y.partial_cmp(&a.bbox.y).unwrap_or(std::cmp::Ordering::Equal));

    let mut rows: Vec<Vec<TextSpan>> = vec![vec![spans.remove(0)]];
    for span in spans {
        let row_y = rows.last().unwrap()[0].bbox.y;
        let tolerance = rows.last().unwrap()[0].bbox.height.max(span.bbox.height).max(1.0);
        if (row_y - span.bbox.y).abs() <= tolerance {
            rows.last_mut().unwrap().push(span);
        } else {
            rows.push(vec![span]);
        }
    }

    for row in &mut rows {
        row.sort_by(|a, b| a.bbox.x.partial_cmp(&b.bbox.x).unwrap_or(std::cmp::Ordering::Equal));
    }
    rows
}

/// Group text spans into columns by X-coordinate proximity (§4.10's
/// `GetTextByColumn`).
///
/// Two spans land in the same column when their X centers differ by less
/// than the wider span's width; columns are returned left-to-right (X
/// ascending), each column sorted top-to-bottom (Y descending).
pub fn group_spans_by_column(mut spans: Vec<TextSpan>) -> Vec<Vec<TextSpan>> {
    if spans.is_empty() {
        return vec![];
    }
    spans.sort_by(|a, b| a.bbox.x.partial_cmp(&b.bbox.x).unwrap_or(std::cmp::Ordering::Equal));

    let mut columns: Vec<Vec<TextSpan>> = vec![vec![spans.remove(0)]];
    for span in spans {
        let col_x = columns.last().unwrap()[0].bbox.x;
        let tolerance = columns.last().unwrap()[0].bbox.width.max(span.bbox.width).max(1.0);
        if (col_x - span.bbox.x).abs() <= tolerance {
            columns.last_mut().unwrap().push(span);
        } else {
            columns.push(vec![span]);
        }
    }

    for column in &mut columns {
        column.sort_by(|a, b| b.bbox.y.partial_cmp(&a.bbox.y).unwrap_or(std::cmp::Ordering::Equal));
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::layout::{Color, FontWeight};

    fn mock_char(c: char, x: f32, y: f32) -> TextChar {
        TextChar {
            char: c,
            bbox: Rect::new(x, y, 10.0, 12.0),
            font_name: "Times".to_string(),
            font_size: 12.0,
            font_weight: FontWeight::Normal,
            color: Color::black(),
            mcid: None,
        }
    }

    #[test]
    fn test_cluster_chars_empty() {
        let chars = vec![];
        let clusters = cluster_chars_into_words(&chars, 8.0);
        assert_eq!(clusters.len(), 0);
    }

    #[test]
    fn test_cluster_chars_single() {
        let chars = vec![mock_char('A', 0.0, 0.0)];
        let clusters = cluster_chars_into_words(&chars, 8.0);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0], vec![0]);
    }

    #[test]
    fn test_cluster_chars_into_words() {
        // "Hello World" - two words
        let chars = vec![
            mock_char('H', 0.0, 0.0),
            mock_char('e', 11.0, 0.0),
            mock_char('l', 22.0, 0.0),
            mock_char('l', 33.0, 0.0),
            mock_char('o', 44.0, 0.0),
            // Big gap
            mock_char('W', 100.0, 0.0),
            mock_char('o', 111.0, 0.0),
            mock_char('r', 122.0, 0.0),
            mock_char('l', 133.0, 0.0),
            mock_char('d', 144.0, 0.0),
        ];

        let clusters = cluster_chars_into_words(&chars, 20.0);

        // Should have 2 clusters
        assert_eq!(clusters.len(), 2);

        // First cluster: "Hello" (indices 0-4)
        assert!(clusters[0].contains(&0));
        assert!(clusters[0].contains(&1));
        assert!(clusters[0].contains(&2));
        assert!(clusters[0].contains(&3));
        assert!(clusters[0].contains(&4));

        // Second cluster: "World" (indices 5-9)
        assert!(clusters[1].contains(&5));
        assert!(clusters[1].contains(&6));
        assert!(clusters[1].contains(&7));
        assert!(clusters[1].contains(&8));
        assert!(clusters[1].contains(&9));
    }

    #[test]
    fn test_cluster_words_empty() {
        let words: Vec<TextBlock> = vec![];
        let clusters = cluster_words_into_lines(&words, 5.0);
        assert_eq!(clusters.len(), 0);
    }

    #[test]
    fn test_cluster_words_single() {
        let chars = vec![mock_char('A', 0.0, 0.0)];
        let word = TextBlock::from_chars(chars);
        let words = vec![word];

        let clusters = cluster_words_into_lines(&words, 5.0);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0], vec![0]);
    }

    #[test]
    fn test_cluster_words_into_lines() {
        // Two lines: "Hello World" on line 1, "Foo Bar" on line 2
        let word1 = TextBlock::from_chars(vec![mock_char('H', 0.0, 0.0)]);
        let word2 = TextBlock::from_chars(vec![mock_char('W', 50.0, 1.0)]); // Same line
        let word3 = TextBlock::from_chars(vec![mock_char('F', 0.0, 30.0)]); // Different line
        let word4 = TextBlock::from_chars(vec![mock_char('B', 50.0, 31.0)]); // Same as word3

        let words = vec![word1, word2, word3, word4];
        let lines = cluster_words_into_lines(&words, 5.0);

        // Should have 2 lines
        assert_eq!(lines.len(), 2);

        // Verify clustering
        // Line 1: words 0 and 1
        assert!(lines[0].contains(&0));
        assert!(lines[0].contains(&1));

        // Line 2: words 2 and 3
        assert!(lines[1].contains(&2));
        assert!(lines[1].contains(&3));
    }

    #[test]
    fn test_words_sorted_by_x_in_line() {
        // Create words in reverse order (right to left) on same line
        // Using realistic word spacing (< 50pt column gap threshold)
        let word1 = TextBlock::from_chars(vec![mock_char('W', 40.0, 0.0)]); // "World" at x=40
        let word2 = TextBlock::from_chars(vec![mock_char('H', 0.0, 1.0)]); // "Hello" at x=0

        let words = vec![word1, word2];
        let lines = cluster_words_into_lines(&words, 5.0);

        assert_eq!(lines.len(), 1);
        // Should be sorted: index 1 (x=0) before index 0 (x=40)
        assert_eq!(lines[0], vec![1, 0]);
    }

    fn make_span(text: &str, x: f32, y: f32) -> TextSpan {
        use crate::geometry::Rect;
        use crate::layout::{Color, FontWeight};
        TextSpan {
            text: text.to_string(),
            bbox: Rect::new(x, y, 50.0, 12.0),
            font_name: "Test".to_string(),
            font_size: 12.0,
            font_weight: FontWeight::Normal,
            is_italic: false,
            color: Color::black(),
            mcid: None,
            sequence: 0,
            offset_semantic: false,
            split_boundary_before: false,
            char_spacing: 0.0,
            word_spacing: 0.0,
            horizontal_scaling: 100.0,
            primary_detected: false,
            writing_mode: WritingMode::Horizontal,
        }
    }

    #[test]
    fn group_spans_by_row_groups_same_line_and_sorts_left_to_right() {
        let spans = vec![
            make_span("World", 60.0, 100.0),
            make_span("Hello", 0.0, 100.0),
            make_span("Row2", 0.0, 50.0),
        ];
        let rows = group_spans_by_row(spans);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0].text, "Hello");
        assert_eq!(rows[0][1].text, "World");
        assert_eq!(rows[1][0].text, "Row2");
    }

    #[test]
    fn group_spans_by_column_groups_same_x_and_sorts_top_to_bottom() {
        let spans = vec![
            make_span("Bottom", 0.0, 20.0),
            make_span("Top", 0.0, 100.0),
            make_span("Col2", 200.0, 50.0),
        ];
        let columns = group_spans_by_column(spans);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0][0].text, "Top");
        assert_eq!(columns[0][1].text, "Bottom");
        assert_eq!(columns[1][0].text, "Col2");
    }

    #[test]
    fn group_spans_by_row_empty_input_returns_empty() {
        assert!(group_spans_by_row(vec![]).is_empty());
        assert!(group_spans_by_column(vec![]).is_empty());
    }
}
