//! Placeholder expansion for event summaries and descriptions.
//!
//! Templates use `{field}` placeholders. `{{` and `}}` are literal braces.
//! Anything that is not a known placeholder is copied through unchanged, so a
//! plain sentence is always a valid template.

use chrono::NaiveDate;

/// Values available to a template for a single event.
#[derive(Debug, Clone)]
pub struct TemplateContext<'a> {
    pub remaining: usize,
    pub elapsed: usize,
    pub total: usize,
    pub date: NaiveDate,
    pub name: &'a str,
    pub location: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Remaining,
    Elapsed,
    Total,
    Date,
    Month,
    Name,
    Location,
}

impl Field {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "remaining" => Some(Field::Remaining),
            "elapsed" => Some(Field::Elapsed),
            "total" => Some(Field::Total),
            "date" => Some(Field::Date),
            "month" => Some(Field::Month),
            "name" => Some(Field::Name),
            "location" => Some(Field::Location),
            _ => None,
        }
    }

    fn write(self, ctx: &TemplateContext<'_>, out: &mut String) {
        match self {
            Field::Remaining => out.push_str(&ctx.remaining.to_string()),
            Field::Elapsed => out.push_str(&ctx.elapsed.to_string()),
            Field::Total => out.push_str(&ctx.total.to_string()),
            Field::Date => out.push_str(&ctx.date.format("%Y-%m-%d").to_string()),
            Field::Month => out.push_str(&ctx.date.format("%Y-%m").to_string()),
            Field::Name => out.push_str(ctx.name),
            Field::Location => out.push_str(ctx.location),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(Field),
}

/// A parsed template, reusable across every event of a countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template. Parsing never fails.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(pos) = rest.find(['{', '}']) {
            literal.push_str(&rest[..pos]);
            let tail = &rest[pos..];

            if let Some(after) = tail.strip_prefix("{{") {
                literal.push('{');
                rest = after;
            } else if let Some(after) = tail.strip_prefix("}}") {
                literal.push('}');
                rest = after;
            } else if let Some((field, after)) = tail
                .strip_prefix('{')
                .and_then(|t| t.split_once('}'))
                .and_then(|(name, after)| Field::from_name(name).map(|f| (f, after)))
            {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(field));
                rest = after;
            } else {
                // Lone brace or unknown placeholder: keep the brace and move on.
                literal.push_str(&tail[..1]);
                rest = &tail[1..];
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            source: source.to_string(),
            segments,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn render(&self, ctx: &TemplateContext<'_>) -> String {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(field) => field.write(ctx, &mut out),
            }
        }
        out
    }
}
