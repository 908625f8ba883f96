//! Lesson identifiers

use super::error::SignalError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the lesson programs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lesson {
    SignalTypes,
    Sinusoids,
    ComplexExponentials,
    EvenOdd,
    SignalOperations,
    Convolution,
    UtilityChecks,
}

impl Lesson {
    /// Every lesson, in teaching order
    pub const ALL: [Lesson; 7] = [
        Lesson::SignalTypes,
        Lesson::Sinusoids,
        Lesson::ComplexExponentials,
        Lesson::EvenOdd,
        Lesson::SignalOperations,
        Lesson::Convolution,
        Lesson::UtilityChecks,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Lesson::SignalTypes => "signal-types",
            Lesson::Sinusoids => "sinusoids",
            Lesson::ComplexExponentials => "complex-exponentials",
            Lesson::EvenOdd => "even-odd",
            Lesson::SignalOperations => "signal-operations",
            Lesson::Convolution => "convolution",
            Lesson::UtilityChecks => "utility-checks",
        }
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lesson {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Lesson::ALL
            .into_iter()
            .find(|lesson| lesson.name() == wanted)
            .ok_or_else(|| SignalError::UnknownLesson(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for lesson in Lesson::ALL {
            assert_eq!(lesson.name().parse::<Lesson>().unwrap(), lesson);
        }
    }

    #[test]
    fn from_str_accepts_underscores_and_case() {
        assert_eq!("Even_Odd".parse::<Lesson>().unwrap(), Lesson::EvenOdd);
    }

    #[test]
    fn unknown_lesson_is_an_error() {
        let err = "fourier".parse::<Lesson>().unwrap_err();
        assert!(matches!(err, SignalError::UnknownLesson(name) if name == "fourier"));
    }

    #[test]
    fn serde_name_matches_display_name() {
        let json = serde_json::to_string(&Lesson::ComplexExponentials).unwrap();
        assert_eq!(json, "\"complex-exponentials\"");
    }
}
