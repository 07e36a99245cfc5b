//! Closed vocabularies for the categorical fields collected by intake forms.
//!
//! Form values arrive in several spellings (`"Not Disclosed"`, `"not-disclosed"`,
//! `"1-3 months"`), so every category parses leniently and anything outside the
//! vocabulary lands in an `Other` variant that scoring treats as unmapped.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lowercases and collapses runs of whitespace, `_` and `-` into a single `-`.
pub(crate) fn normalize_label(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut pending_separator = false;

    for ch in raw.trim().chars() {
        if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending_separator = !normalized.is_empty();
            continue;
        }
        if pending_separator {
            normalized.push('-');
            pending_separator = false;
        }
        normalized.extend(ch.to_lowercase());
    }

    normalized
}

macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $label:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            Other,
        }

        impl $name {
            /// Recognised values in declaration order.
            pub const KNOWN: &'static [Self] = &[$(Self::$variant),+];

            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Other => "other",
                }
            }

            pub fn parse(raw: &str) -> Self {
                let normalized = normalize_label(raw);
                $(
                    if normalized == normalize_label($label)
                        $(|| normalized == normalize_label($alias))*
                    {
                        return Self::$variant;
                    }
                )+
                Self::Other
            }

            pub const fn is_recognised(self) -> bool {
                !matches!(self, Self::Other)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::parse(value)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok(Self::parse(&raw))
            }
        }
    };
}

categorical! {
    /// Headcount band of the prospect's organization.
    CompanySize {
        OneToTen => "1-10",
        ElevenToFifty => "11-50",
        FiftyOneToTwoHundred => "51-200",
        TwoHundredOneToFiveHundred => "201-500",
        OverFiveHundred => "500+" | "500-plus",
    }
}

categorical! {
    /// Monthly claims submitted by the prospect.
    ClaimsVolume {
        UnderOneThousand => "<1000" | "under-1000" | "0-1000",
        OneToFiveThousand => "1000-5000",
        FiveToTenThousand => "5000-10000",
        TenToTwentyFiveThousand => "10000-25000",
        TwentyFiveToFiftyThousand => "25000-50000",
        OverFiftyThousand => "50000+" | "50000-plus",
    }
}

impl ClaimsVolume {
    /// Representative monthly claim count for the bucket; unrecognised buckets estimate zero.
    pub const fn estimated_monthly_claims(self) -> u32 {
        match self {
            Self::UnderOneThousand => 500,
            Self::OneToFiveThousand => 3_000,
            Self::FiveToTenThousand => 7_500,
            Self::TenToTwentyFiveThousand => 17_500,
            Self::TwentyFiveToFiftyThousand => 37_500,
            Self::OverFiftyThousand => 75_000,
            Self::Other => 0,
        }
    }
}

categorical! {
    /// Reason given on the contact form.
    InquiryType {
        PricingRequest => "pricing-request" | "pricing",
        DemoRequest => "demo-request" | "demo",
        Consultation => "consultation",
        Partnership => "partnership",
        GeneralInquiry => "general-inquiry" | "general",
        Support => "support",
    }
}

categorical! {
    /// Channel a lead arrived through.
    LeadSource {
        Referral => "referral",
        PricingCalculator => "pricing-calculator",
        Website => "website",
        TradeShow => "trade-show",
        Webinar => "webinar",
        EmailCampaign => "email-campaign",
        SocialMedia => "social-media",
        ColdOutreach => "cold-outreach",
    }
}

categorical! {
    /// How soon the prospect intends to start; ordered from most to least urgent.
    Timeframe {
        Immediate => "immediate" | "asap",
        OneToThreeMonths => "1-3-months",
        ThreeToSixMonths => "3-6-months",
        SixToTwelveMonths => "6-12-months",
        PlanningStage => "planning-stage" | "just-planning" | "planning",
    }
}

categorical! {
    /// Annual budget band. `NotDisclosed` never contributes to a score.
    BudgetBand {
        UnderTenThousand => "<10k" | "under-10k",
        TenToFiftyThousand => "10k-50k",
        FiftyToHundredThousand => "50k-100k",
        HundredToFiveHundredThousand => "100k-500k",
        OverFiveHundredThousand => "500k+",
        NotDisclosed => "not-disclosed",
    }
}

impl BudgetBand {
    pub const fn is_disclosed(self) -> bool {
        !matches!(self, Self::NotDisclosed)
    }
}

categorical! {
    /// Self-reported in-house billing staff on the pricing calculator.
    StaffingStatus {
        Yes => "Yes",
        No => "No",
        Partially => "Partially",
    }
}
