pub const GREETING: &str =
    "👋 Hi! I'm your AI assistant. Try asking about our pricing, features, integration, or security!";

pub const FALLBACK_SOURCE: &str = "General Documentation";

pub const FALLBACK_TEXTS: [&str; 3] = [
    "I can help you with information about our pricing, features, integration, or security. What would you like to know?",
    "I'm not sure about that specific query, but I can tell you about our search API capabilities, pricing plans, or help with integration questions.",
    "While I don't have specific information about that, I can help you with our pricing, features, security measures, or integration process. What interests you most?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedResponse {
    pub trigger: &'static str,
    pub answer: &'static str,
    pub sources: &'static [&'static str],
}

impl CannedResponse {
    /// Every string field of the record, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        [self.trigger, self.answer]
            .into_iter()
            .chain(self.sources.iter().copied())
    }
}

/// Order in which trigger keywords are checked against a query. Differs from
/// table order so a query naming "security" alongside a later topic still
/// gets the security answer; only "pricing" outranks it.
pub const KEYWORD_PRIORITY: [&str; 4] = ["pricing", "security", "integration", "features"];

/// Broad substring scans walk this table in order; the first match wins.
pub static CANNED_RESPONSES: [CannedResponse; 4] = [
    CannedResponse {
        trigger: "pricing",
        answer: "Our pricing is structured into three tiers:\n\n\
1. Starter ($29/month): Perfect for small websites with up to 100,000 searches/month\n\
2. Pro ($99/month): Ideal for growing businesses with up to 500,000 searches/month\n\
3. Enterprise ($299/month): For large-scale applications with unlimited searches\n\n\
All plans come with a 14-day free trial. Would you like to know more about specific features included in each plan?",
        sources: &["Pricing Page", "Plans Comparison"],
    },
    CannedResponse {
        trigger: "integration",
        answer: "Integration is straightforward with multiple options:\n\n\
1. JavaScript snippet: Add our CDN script and initialize with one line\n\
2. React Component: Import our package and use the <SearchAI> component\n\
3. REST API: Direct API access for custom implementations\n\n\
The basic setup takes less than 5 minutes. Would you like to see code examples?",
        sources: &["Integration Guide", "API Documentation", "Quick Start Guide"],
    },
    CannedResponse {
        trigger: "features",
        answer: "SearchAI offers powerful features including:\n\n\
• AI-powered semantic search\n\
• Real-time content indexing\n\
• Custom styling options\n\
• Analytics dashboard\n\
• Multi-language support\n\
• Source citations\n\
• Chat interface\n\
• Security controls\n\n\
Which feature would you like to learn more about?",
        sources: &["Features Overview", "Technical Documentation"],
    },
    CannedResponse {
        trigger: "security",
        answer: "We take security seriously with multiple layers of protection:\n\n\
• End-to-end encryption\n\
• SOC 2 Type II certified\n\
• GDPR compliant\n\
• Regular security audits\n\
• Custom data retention policies\n\
• Access controls\n\n\
All data is encrypted both in transit and at rest.",
        sources: &["Security Whitepaper", "Compliance Documentation"],
    },
];

#[cfg(test)]
mod tests {
    use super::{CANNED_RESPONSES, FALLBACK_TEXTS, KEYWORD_PRIORITY};
    use std::collections::BTreeSet;

    #[test]
    fn triggers_are_unique_and_lowercase() {
        let triggers: BTreeSet<_> = CANNED_RESPONSES.iter().map(|r| r.trigger).collect();
        assert_eq!(triggers.len(), CANNED_RESPONSES.len());
        for trigger in triggers {
            assert_eq!(trigger, trigger.to_lowercase());
        }
    }

    #[test]
    fn fields_cover_trigger_answer_and_sources() {
        let integration = &CANNED_RESPONSES[1];
        let fields: Vec<_> = integration.fields().collect();
        assert_eq!(fields.len(), 2 + integration.sources.len());
        assert_eq!(fields[0], "integration");
        assert_eq!(fields.last().copied(), Some("Quick Start Guide"));
    }

    #[test]
    fn keyword_priority_names_every_trigger_once() {
        let priority: BTreeSet<_> = KEYWORD_PRIORITY.iter().copied().collect();
        let triggers: BTreeSet<_> = CANNED_RESPONSES.iter().map(|r| r.trigger).collect();
        assert_eq!(priority.len(), KEYWORD_PRIORITY.len());
        assert_eq!(priority, triggers);
    }

    #[test]
    fn fallback_texts_are_distinct() {
        let unique: BTreeSet<_> = FALLBACK_TEXTS.iter().collect();
        assert_eq!(unique.len(), 3);
    }
}
