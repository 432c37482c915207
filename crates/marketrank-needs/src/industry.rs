//! IndustryResolver: email domain keywords first, declared industry second.

use marketrank_core::UserProfile;

/// Ordered keyword → industry table. The first keyword contained in the
/// domain stem wins, so more specific keywords sit above the ones they
/// contain ("media" before "med").
pub const DEFAULT_KEYWORDS: &[(&str, &str)] = &[
    ("health", "Healthcare"),
    ("media", "Media"),
    ("studio", "Media"),
    ("med", "Healthcare"),
    ("clinic", "Healthcare"),
    ("pharma", "Healthcare"),
    ("bank", "Financial Services"),
    ("fin", "Financial Services"),
    ("capital", "Financial Services"),
    ("pay", "Financial Services"),
    ("insur", "Insurance"),
    ("edu", "Education"),
    ("school", "Education"),
    ("learn", "Education"),
    ("univ", "Education"),
    ("retail", "Retail"),
    ("shop", "Retail"),
    ("store", "Retail"),
    ("commerce", "Retail"),
    ("logistic", "Logistics"),
    ("freight", "Logistics"),
    ("manufactur", "Manufacturing"),
    ("factory", "Manufacturing"),
    ("industrial", "Manufacturing"),
    ("energy", "Energy"),
    ("solar", "Energy"),
    ("gov", "Public Sector"),
    ("tech", "Technology"),
    ("soft", "Technology"),
    ("cloud", "Technology"),
    ("data", "Technology"),
];

/// Resolves a single industry label for a profile.
#[derive(Debug, Clone)]
pub struct IndustryResolver {
    keywords: Vec<(String, String)>,
}

impl IndustryResolver {
    /// Resolver with the built-in keyword table.
    pub fn new() -> Self {
        Self::with_keywords(
            DEFAULT_KEYWORDS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    /// Resolver with a custom ordered keyword table.
    pub fn with_keywords(keywords: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            keywords: keywords
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v))
                .filter(|(k, _)| !k.is_empty())
                .collect(),
        }
    }

    /// Email-domain match, else the declared industry, else `None`.
    pub fn resolve(&self, profile: Option<&UserProfile>) -> Option<String> {
        let profile = profile?;

        if let Some(stem) = profile.email.as_deref().and_then(domain_stem) {
            if let Some((_, industry)) = self.keywords.iter().find(|(k, _)| stem.contains(k)) {
                return Some(industry.clone());
            }
        }

        profile
            .industry
            .as_deref()
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .map(str::to_string)
    }
}

impl Default for IndustryResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// `"Ana@www.AcmeHealth.co.uk"` → `"acmehealth.co"`.
///
/// Returns `None` for anything without a usable domain.
pub fn domain_stem(email: &str) -> Option<String> {
    let (_, domain) = email.trim().rsplit_once('@')?;
    let domain = domain.trim().to_lowercase();
    let domain = domain.strip_prefix("www.").unwrap_or(domain.as_str());
    let stem = match domain.rsplit_once('.') {
        Some((stem, _tld)) => stem,
        None => domain,
    };
    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}
