//! Top-level domain lists for URL recognition.
//!
//! Hosts written without a scheme only count as URLs when they end in one of
//! these TLDs. Country-code TLDs get stricter treatment (see
//! [`crate::urls`]).

use std::collections::HashSet;
use std::sync::LazyLock;

/// Generic top-level domains.
pub static GENERIC_TLDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Legacy and sponsored
    set.extend([
        "aero", "asia", "biz", "cat", "com", "coop", "edu", "gov", "info", "int", "jobs", "mil",
        "mobi", "museum", "name", "net", "org", "post", "pro", "tel", "travel", "xxx",
    ]);

    // Technology
    set.extend([
        "ai", "app", "cloud", "codes", "computer", "data", "dev", "digital", "download",
        "email", "host", "hosting", "link", "network", "online", "page", "site", "software",
        "systems", "tech", "technology", "tools", "web", "website", "wiki", "zip",
    ]);

    // Business and commerce
    set.extend([
        "agency", "bank", "biz", "business", "capital", "company", "consulting", "deals",
        "enterprises", "finance", "financial", "fund", "group", "inc", "industries",
        "international", "investments", "llc", "ltd", "management", "market", "marketing",
        "media", "money", "partners", "services", "shop", "shopping", "solutions", "store",
        "studio", "supply", "ventures", "works",
    ]);

    // Community and lifestyle
    set.extend([
        "art", "blog", "book", "cafe", "city", "club", "community", "design", "education",
        "events", "fashion", "fit", "fun", "game", "games", "global", "guru", "health", "life",
        "live", "love", "music", "news", "one", "photo", "photography", "photos", "pics",
        "pizza", "place", "plus", "press", "social", "space", "team", "today", "top", "video",
        "vip", "world", "xyz", "zone",
    ]);

    // Brands and geography
    set.extend([
        "amazon", "apple", "google", "microsoft", "yahoo", "youtube", "berlin", "london",
        "nyc", "paris", "tokyo", "moscow", "africa", "eus", "scot", "wales",
    ]);

    set
});

/// Country-code top-level domains.
pub static COUNTRY_TLDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "ac", "ad", "ae", "af", "ag", "ai", "al", "am", "ao", "aq", "ar", "as", "at", "au", "aw",
        "ax", "az", "ba", "bb", "bd", "be", "bf", "bg", "bh", "bi", "bj", "bm", "bn", "bo", "br",
        "bs", "bt", "bw", "by", "bz", "ca", "cc", "cd", "cf", "cg", "ch", "ci", "ck", "cl", "cm",
        "cn", "co", "cr", "cu", "cv", "cw", "cx", "cy", "cz", "de", "dj", "dk", "dm", "do", "dz",
        "ec", "ee", "eg", "er", "es", "et", "eu", "fi", "fj", "fk", "fm", "fo", "fr", "ga", "gb",
        "gd", "ge", "gf", "gg", "gh", "gi", "gl", "gm", "gn", "gp", "gq", "gr", "gs", "gt", "gu",
        "gw", "gy", "hk", "hm", "hn", "hr", "ht", "hu", "id", "ie", "il", "im", "in", "io", "iq",
        "ir", "is", "it", "je", "jm", "jo", "jp", "ke", "kg", "kh", "ki", "km", "kn", "kp", "kr",
        "kw", "ky", "kz", "la", "lb", "lc", "li", "lk", "lr", "ls", "lt", "lu", "lv", "ly", "ma",
        "mc", "md", "me", "mg", "mh", "mk", "ml", "mm", "mn", "mo", "mp", "mq", "mr", "ms", "mt",
        "mu", "mv", "mw", "mx", "my", "mz", "na", "nc", "ne", "nf", "ng", "ni", "nl", "no", "np",
        "nr", "nu", "nz", "om", "pa", "pe", "pf", "pg", "ph", "pk", "pl", "pm", "pn", "pr", "ps",
        "pt", "pw", "py", "qa", "re", "ro", "rs", "ru", "rw", "sa", "sb", "sc", "sd", "se", "sg",
        "sh", "si", "sk", "sl", "sm", "sn", "so", "sr", "ss", "st", "su", "sv", "sx", "sy", "sz",
        "tc", "td", "tf", "tg", "th", "tj", "tk", "tl", "tm", "tn", "to", "tr", "tt", "tv", "tw",
        "tz", "ua", "ug", "uk", "us", "uy", "uz", "va", "vc", "ve", "vg", "vi", "vn", "vu", "wf",
        "ws", "ye", "yt", "za", "zm", "zw",
    ]
    .into_iter()
    .collect()
});

/// Country codes that behave like generic TLDs for short scheme-less hosts
/// (`t.co`, `example.tv`).
pub const SPECIAL_COUNTRY_TLDS: &[&str] = &["co", "tv"];

/// Whether `tld` (lowercase) is a known top-level domain.
///
/// Punycode TLDs (`xn--...`) are always accepted.
pub fn is_known_tld(tld: &str) -> bool {
    tld.starts_with("xn--") || GENERIC_TLDS.contains(tld) || COUNTRY_TLDS.contains(tld)
}

/// Whether `tld` (lowercase) is only a country code.
pub fn is_country_only(tld: &str) -> bool {
    COUNTRY_TLDS.contains(tld) && !GENERIC_TLDS.contains(tld)
}
