use std::fmt;

/// Which suppression export a record came from. Merge precedence follows
/// the fixed source order: block, bounce, invalid, spam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuppressionType {
    Block,
    Bounce,
    Invalid,
    Spam,
}

impl SuppressionType {
    pub const fn as_str(self) -> &'static str {
        match self {
            SuppressionType::Block => "block",
            SuppressionType::Bounce => "bounce",
            SuppressionType::Invalid => "invalid",
            SuppressionType::Spam => "spam",
        }
    }
}

impl fmt::Display for SuppressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handling bucket assigned to every suppressed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    A,
    B,
    C,
    D,
    E,
}

impl Bucket {
    pub const ALL: [Bucket; 5] = [Bucket::A, Bucket::B, Bucket::C, Bucket::D, Bucket::E];

    pub const fn as_str(self) -> &'static str {
        match self {
            Bucket::A => "A",
            Bucket::B => "B",
            Bucket::C => "C",
            Bucket::D => "D",
            Bucket::E => "E",
        }
    }

    /// Explainer shown on the summary card for this bucket.
    pub const fn explainer(self) -> &'static str {
        match self {
            Bucket::A => "Active users; stop bulk emails, allow transactional messages only",
            Bucket::B => "Spam reporters; permanently block all emails, keep account",
            Bucket::C => "Hard bounce, no login; mark inactive and review later",
            Bucket::D => "Obvious junk emails; safe to archive or soft delete",
            Bucket::E => "Temporary delivery issues; pause emails and retry later",
        }
    }

    pub const fn recommended_action(self) -> &'static str {
        match self {
            Bucket::A => "Stop bulk emails, allow transactional",
            Bucket::B => "Block all emails, retain account",
            Bucket::C => "Mark inactive, review later",
            Bucket::D => "Safe soft delete / archive",
            Bucket::E => "Retry after cooldown",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How serious the suppression reason is, derived from the reason text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    High,
    Critical,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of email the address may still receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailPolicy {
    FullyBlocked,
    MarketingDisabled,
}

impl EmailPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            EmailPolicy::FullyBlocked => "fully_blocked",
            EmailPolicy::MarketingDisabled => "marketing_disabled",
        }
    }
}

impl fmt::Display for EmailPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
