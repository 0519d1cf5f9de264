// File: crates/scrolly-core/src/steps.rs
// Summary: Narrative steps, their sections, and which group each step highlights.

use std::fmt;
use std::str::FromStr;

use crate::dataset::Group;
use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    Intro,
    National,
    Insights,
    Policy,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Intro, Step::National, Step::Insights, Step::Policy];

    /// Value of the section's `data-step` attribute.
    pub const fn id(self) -> &'static str {
        match self {
            Step::Intro => "intro",
            Step::National => "national",
            Step::Insights => "insights",
            Step::Policy => "policy",
        }
    }

    /// Group emphasized while this step is active.
    ///
    /// There is no Asian step: policy maps to Latinx.
    pub const fn highlight(self) -> Option<Group> {
        match self {
            Step::Intro => None,
            Step::National => Some(Group::Black),
            Step::Insights => Some(Group::White),
            Step::Policy => Some(Group::Latinx),
        }
    }

    pub fn section(self) -> &'static Section {
        &SECTIONS[self as usize]
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Step {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Step::ALL
            .into_iter()
            .find(|step| step.id() == s.trim())
            .ok_or_else(|| Error::MalformedInput(format!("unknown step '{s}'")))
    }
}

/// One narrative block beside the sticky chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub step: Step,
    pub heading: &'static str,
    pub body: &'static str,
}

/// Sections in reading order.
pub static SECTIONS: [Section; 4] = [
    Section {
        step: Step::Intro,
        heading: "Wealth across America",
        body: "Median total assets held by households, by race, across survey years.",
    },
    Section {
        step: Step::National,
        heading: "The national picture",
        body: "Black households hold a small fraction of the assets of other households, and the gap persists year after year.",
    },
    Section {
        step: Step::Insights,
        heading: "Key insights",
        body: "White households' median assets sit well above every other group throughout the period.",
    },
    Section {
        step: Step::Policy,
        heading: "Policy implications",
        body: "Latinx households trail as well, which points to policy that builds assets rather than income alone.",
    },
];
