use crate::demo::responses::{
    CannedResponse, CANNED_RESPONSES, FALLBACK_SOURCE, FALLBACK_TEXTS, KEYWORD_PRIORITY,
};
use crate::demo::Reply;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

pub struct ResponseMatcher {
    records: &'static [CannedResponse],
    rng: StdRng,
}

impl ResponseMatcher {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            records: &CANNED_RESPONSES,
            rng,
        }
    }

    /// Looks up the record answering `query`.
    ///
    /// A record whose trigger keyword appears in the query wins first, checked
    /// in [`KEYWORD_PRIORITY`] order; failing that, the first record in table
    /// order with any field containing the whole query is returned.
    pub fn find_record(&self, query: &str) -> Option<&'static CannedResponse> {
        let normalized = normalize(query);
        if normalized.is_empty() {
            return None;
        }

        let records = self.records;
        KEYWORD_PRIORITY
            .iter()
            .filter(|keyword| normalized.contains(*keyword))
            .find_map(|keyword| records.iter().find(|record| record.trigger == *keyword))
            .or_else(|| {
                records.iter().find(|record| {
                    record
                        .fields()
                        .any(|field| field.to_lowercase().contains(normalized.as_str()))
                })
            })
    }

    pub fn respond(&mut self, query: &str) -> Reply {
        match self.find_record(query) {
            Some(record) => {
                debug!(trigger = record.trigger, "matched canned response");
                Reply {
                    text: record.answer.to_string(),
                    sources: record.sources.iter().map(|s| s.to_string()).collect(),
                }
            }
            None => self.fallback(),
        }
    }

    fn fallback(&mut self) -> Reply {
        let index = self.rng.gen_range(0..FALLBACK_TEXTS.len());
        debug!(index, "no canned response matched, using fallback");
        Reply {
            text: FALLBACK_TEXTS[index].to_string(),
            sources: vec![FALLBACK_SOURCE.to_string()],
        }
    }
}

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}
