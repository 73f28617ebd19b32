/// Split raw text into sentence strings.
///
/// A sentence ends at a run of `.`, `!`, or `?` followed by whitespace or
/// end of text. Pieces are trimmed and empty ones dropped; a trailing
/// fragment with no terminator counts as a sentence of its own.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        current.push(ch);
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        // swallow the rest of a terminator run ("...", "?!")
        while let Some(&next) = chars.peek() {
            if matches!(next, '.' | '!' | '?') {
                current.push(next);
                chars.next();
            } else {
                break;
            }
        }
        if chars.peek().map_or(true, |c| c.is_whitespace()) {
            push_trimmed(&mut sentences, &current);
            current.clear();
        }
    }
    push_trimmed(&mut sentences, &current);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminators() {
        let s = split_sentences("Cats sleep. Dogs bark! Do fish swim?");
        assert_eq!(s, vec!["Cats sleep.", "Dogs bark!", "Do fish swim?"]);
    }

    #[test]
    fn keeps_terminator_runs_together() {
        let s = split_sentences("Wait... really?! Yes.");
        assert_eq!(s, vec!["Wait...", "really?!", "Yes."]);
    }

    #[test]
    fn version_numbers_do_not_split() {
        let s = split_sentences("Released in 3.14 last year. Done.");
        assert_eq!(s, vec!["Released in 3.14 last year.", "Done."]);
    }

    #[test]
    fn trailing_fragment_is_a_sentence() {
        let s = split_sentences("First one. and a fragment");
        assert_eq!(s, vec!["First one.", "and a fragment"]);
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("   \n ").is_empty());
    }
}
