//! Line layout as a pre-parsed template, so `[{time}] [{scope}/{level}] {msg}{extras}`
//! is scanned once at construction instead of on every record.

/// Known substitution tokens. Unknown `{names}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Time,
    Date,
    Scope,
    Level,
    Msg,
    Extras,
}

impl Placeholder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Date => "date",
            Self::Scope => "scope",
            Self::Level => "level",
            Self::Msg => "msg",
            Self::Extras => "extras",
        }
    }

    pub const ALL: &'static [Self] = &[
        Self::Time,
        Self::Date,
        Self::Scope,
        Self::Level,
        Self::Msg,
        Self::Extras,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    /// Separators, brackets and unknown `{names}` pass through untouched.
    Literal(String),
    /// Known tokens are substituted at render time.
    Placeholder(Placeholder),
}

/// Parse once, render many.
#[derive(Debug, Clone)]
pub struct FormatTemplate {
    segments: Vec<FormatSegment>,
}

impl FormatTemplate {
    /// The layout written to disk unless configured otherwise.
    pub const DEFAULT: &'static str = "[{time}] [{scope}/{level}] {msg}{extras}";

    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|c| open + c) else {
                break;
            };
            current.push_str(&rest[..open]);
            let name = &rest[open + 1..close];

            match Self::match_placeholder(name) {
                Some(ph) => {
                    if !current.is_empty() {
                        segments.push(FormatSegment::Literal(std::mem::take(&mut current)));
                    }
                    segments.push(FormatSegment::Placeholder(ph));
                }
                None => current.push_str(&rest[open..=close]),
            }
            rest = &rest[close + 1..];
        }
        current.push_str(rest);

        if !current.is_empty() {
            segments.push(FormatSegment::Literal(current));
        }

        Self { segments }
    }

    fn match_placeholder(name: &str) -> Option<Placeholder> {
        Placeholder::ALL.iter().copied().find(|ph| ph.as_str() == name)
    }

    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    #[must_use]
    pub fn render(&self, values: &FormatValues) -> String {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => result.push_str(s),
                FormatSegment::Placeholder(ph) => {
                    let value = match ph {
                        Placeholder::Time => &values.time,
                        Placeholder::Date => &values.date,
                        Placeholder::Scope => &values.scope,
                        Placeholder::Level => &values.level,
                        Placeholder::Msg => &values.msg,
                        Placeholder::Extras => &values.extras,
                    };
                    result.push_str(value);
                }
            }
        }

        result
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::parse(Self::DEFAULT)
    }
}

/// One field per placeholder, so a missing value renders as empty instead of failing.
#[derive(Debug, Clone, Default)]
pub struct FormatValues {
    pub time: String,
    pub date: String,
    pub scope: String,
    pub level: String,
    pub msg: String,
    pub extras: String,
}

impl FormatValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    #[must_use]
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use]
    pub fn msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }

    /// Already includes its leading space when non-empty.
    #[must_use]
    pub fn extras(mut self, extras: impl Into<String>) -> Self {
        self.extras = extras.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_placeholder_stays_literal() {
        let template = FormatTemplate::parse("{msg} {nope}");
        assert_eq!(
            template.segments(),
            &[
                FormatSegment::Placeholder(Placeholder::Msg),
                FormatSegment::Literal(" {nope}".to_string()),
            ]
        );
    }

    #[test]
    fn unclosed_brace_is_literal() {
        let template = FormatTemplate::parse("{msg} {oops");
        let out = template.render(&FormatValues::new().msg("hi"));
        assert_eq!(out, "hi {oops");
    }
}
