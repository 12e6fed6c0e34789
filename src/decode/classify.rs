// src/decode/classify.rs
//! Ordered keyword table mapping action text to stat deltas.
//!
//! Rules are tried top to bottom and the first keyword found anywhere in the
//! text wins. Order is significant: `파울자유투` must be tried before `파울`,
//! and each `...성공` before its `...시도`.
use crate::config::options::DunkPolicy;
use crate::stats::Delta;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    ThreeMade,
    DunkMade,
    TwoMade,
    FreeThrowMade,
    ThreeMissed,
    DunkMissed,
    TwoMissed,
    FreeThrowMissed,
    Assist,
    Block,
    DefRebound,
    OffRebound,
    Steal,
    Turnover,
    FoulFreeThrow,
    Foul,
    GoodDefense,
    Substitution,
    TeamRecord,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionRule {
    pub keyword: &'static str,
    pub kind: ActionKind,
    pub delta: &'static Delta,
}

impl ActionRule {
    const fn new(keyword: &'static str, kind: ActionKind, delta: &'static Delta) -> Self {
        Self { keyword, kind, delta }
    }

    /// Recognized, but carries no stat (substitutions, team records).
    pub fn is_silent(&self) -> bool {
        self.delta.is_empty()
    }
}

use ActionKind::*;

const DUNK_MADE_AS_TWO: ActionRule =
    ActionRule::new("덩크슛성공", DunkMade, delta![Dk => 1, Dka => 1, TwoPm => 1, TwoPa => 1]);
const DUNK_MADE_SEPARATE: ActionRule =
    ActionRule::new("덩크슛성공", DunkMade, delta![Dk => 1, Dka => 1]);

const CANONICAL: [ActionRule; 21] = [
    ActionRule::new("3점슛성공", ThreeMade, delta![ThreePm => 1, ThreePa => 1]),
    DUNK_MADE_AS_TWO,
    ActionRule::new("2점슛성공", TwoMade, delta![TwoPm => 1, TwoPa => 1]),
    ActionRule::new("자유투성공", FreeThrowMade, delta![Ftm => 1, Fta => 1]),
    ActionRule::new("3점슛시도", ThreeMissed, delta![ThreePa => 1]),
    // A missed dunk is never a 2-point attempt, whatever the policy.
    ActionRule::new("덩크슛시도", DunkMissed, delta![Dka => 1]),
    ActionRule::new("2점슛시도", TwoMissed, delta![TwoPa => 1]),
    ActionRule::new("자유투시도", FreeThrowMissed, delta![Fta => 1]),
    ActionRule::new("어시스트", Assist, delta![Ast => 1]),
    ActionRule::new("블록", Block, delta![Blk => 1]),
    ActionRule::new("수비리바운드", DefRebound, delta![Dreb => 1]),
    ActionRule::new("공격리바운드", OffRebound, delta![Oreb => 1]),
    ActionRule::new("스틸", Steal, delta![Stl => 1]),
    ActionRule::new("턴오버", Turnover, delta![To => 1]),
    ActionRule::new("파울자유투", FoulFreeThrow, delta![Pf => 1, Fta => 1]),
    // Team lines are normally filtered upstream by prefix; these catch any
    // that slip through before the bare 파울 rule can claim 팀파울.
    ActionRule::new("팀파울", TeamRecord, delta![]),
    ActionRule::new("팀리바운드", TeamRecord, delta![]),
    ActionRule::new("팀속공", TeamRecord, delta![]),
    ActionRule::new("파울", Foul, delta![Pf => 1]),
    ActionRule::new("굿디펜스", GoodDefense, delta![Gd => 1]),
    ActionRule::new("교체", Substitution, delta![]),
];

/// Immutable, ordered rule list. Built once per decode configuration and
/// shared read-only across games.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionTable {
    rules: Vec<ActionRule>,
}

impl Default for ActionTable {
    fn default() -> Self {
        Self::for_policy(DunkPolicy::default())
    }
}

impl ActionTable {
    pub fn for_policy(policy: DunkPolicy) -> Self {
        let rules = CANONICAL
            .iter()
            .map(|rule| match (rule.kind, policy) {
                (DunkMade, DunkPolicy::Separate) => DUNK_MADE_SEPARATE,
                _ => *rule,
            })
            .collect();
        Self { rules }
    }

    pub fn rules(&self) -> &[ActionRule] {
        &self.rules
    }

    /// First matching rule, or `None` for unrecognized text.
    pub fn classify(&self, action: &str) -> Option<&ActionRule> {
        self.rules.iter().find(|r| action.contains(r.keyword))
    }

    pub fn position(&self, kind: ActionKind) -> Option<usize> {
        self.rules.iter().position(|r| r.kind == kind)
    }
}
