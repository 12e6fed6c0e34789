// src/decode/roster.rs
use std::collections::HashSet;

/// Result of looking up the player an action text belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Attribution<'a> {
    /// Roster index and the action text that follows the name.
    Player { index: usize, action: &'a str },
    None,
    Ambiguous(Vec<usize>),
}

/// One team's players, in roster order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Normalize crawled names: some rosters arrive with several names fused
    /// by newlines or wrapped in stray quotes. Empty entries are dropped.
    /// Duplicates are kept so attribution can report them as ambiguous.
    pub fn from_names<S: AsRef<str>>(raw: &[S]) -> Self {
        let names = raw
            .iter()
            .flat_map(|entry| entry.as_ref().split('\n'))
            .map(|name| name.trim().trim_matches('"').trim())
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn has_duplicates(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.names.len());
        !self.names.iter().all(|n| seen.insert(n.as_str()))
    }

    /// Find the player whose full name opens `text` as whole tokens.
    ///
    /// `"제레미아 틸먼 2점슛성공"` matches `제레미아 틸먼` (and would also match a
    /// `제레미아` entry; the longer name wins). `"김선형 파울"` does not match `김선`.
    pub fn attribute<'a>(&self, text: &'a str) -> Attribution<'a> {
        let text = text.trim_start();
        let mut best_len = 0usize;
        let mut hits: Vec<usize> = Vec::new();

        for (i, name) in self.names.iter().enumerate() {
            let Some(rest) = text.strip_prefix(name.as_str()) else { continue };
            if !(rest.is_empty() || rest.starts_with(char::is_whitespace)) {
                continue;
            }
            if name.len() > best_len {
                best_len = name.len();
                hits.clear();
            }
            if name.len() == best_len {
                hits.push(i);
            }
        }

        match hits.as_slice() {
            [] => Attribution::None,
            [index] => Attribution::Player { index: *index, action: text[best_len..].trim() },
            _ => Attribution::Ambiguous(hits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_fused_and_quoted_names() {
        let r = Roster::from_names(&["한희원\n\"최창진\"", "  문성곤 ", "", "\n"]);
        assert_eq!(r.names(), ["한희원", "최창진", "문성곤"]);
    }

    #[test]
    fn whole_token_prefix_only() {
        let r = Roster::from_names(&["김선", "안영준"]);
        assert_eq!(r.attribute("김선형 파울"), Attribution::None);
        assert_eq!(r.attribute("팀원 안영준 스틸"), Attribution::None);
        assert_eq!(
            r.attribute("안영준 스틸"),
            Attribution::Player { index: 1, action: "스틸" }
        );
    }

    #[test]
    fn longest_name_wins() {
        let r = Roster::from_names(&["제레미아", "제레미아 틸먼"]);
        assert_eq!(
            r.attribute("제레미아 틸먼 블록"),
            Attribution::Player { index: 1, action: "블록" }
        );
        assert_eq!(
            r.attribute("제레미아 블록"),
            Attribution::Player { index: 0, action: "블록" }
        );
    }

    #[test]
    fn duplicate_names_are_ambiguous() {
        let r = Roster::from_names(&["이현석", "이현석"]);
        assert!(r.has_duplicates());
        assert_eq!(r.attribute("이현석 어시스트"), Attribution::Ambiguous(vec![0, 1]));
    }

    #[test]
    fn name_only_text_has_empty_action() {
        let r = Roster::from_names(&["허훈"]);
        assert_eq!(r.attribute("허훈"), Attribution::Player { index: 0, action: "" });
    }
}
