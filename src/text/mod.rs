//! Rule-based cleanup for review text and model output.
//!
//! The summarization model both receives user-authored text and emits text
//! that can carry tokenizer residue, so input and output pass through the
//! same family of normalization rules.

use once_cell::sync::Lazy;
use regex::Regex;

static CODE_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static BACKTICKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"`+").unwrap());
static HASH_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"#{2,}").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

// Lines that look like prompt scaffolding rather than review content.
static KR_SUMMARIZE_REFERENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(다음|아래).{0,10}(요약|정리)").unwrap());
static KR_SUMMARIZE_IMPERATIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(요약|정리).{0,10}(해줘|해주세요|하세요)").unwrap());

const DROP_PREFIXES: &[&str] = &[
    "prompt:",
    "instruction:",
    "system:",
    "assistant:",
    "user:",
    "요약:",
    "요약해",
    "요약해줘",
    "요약해 주세요",
    "요약해주세요",
    "지시:",
    "명령:",
    "role:",
    "response:",
    "output:",
    "input:",
    "결과:",
    "요약 결과:",
    "요약결과:",
    "정리:",
    "정리해",
    "정리해줘",
];

/// Strips code blocks, model-token residue, and instruction-looking lines
/// from a review comment. Returns an empty string when nothing usable
/// survives.
pub fn sanitize(text: &str) -> String {
    let t = text.trim();
    if t.is_empty() {
        return String::new();
    }

    let t = CODE_BLOCK.replace_all(t, " ");
    let t = BACKTICKS.replace_all(&t, " ");

    // Token residue from sentencepiece-style tokenizers.
    let t = t.replace("<s>", " ").replace("</s>", " ").replace('▁', " ");
    let t = HASH_RUN.replace_all(&t, " ");

    let mut lines: Vec<&str> = Vec::new();
    for raw in t.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let low = line.to_lowercase();
        if DROP_PREFIXES.iter().any(|p| low.starts_with(p)) {
            continue;
        }
        if KR_SUMMARIZE_REFERENT.is_match(line) || KR_SUMMARIZE_IMPERATIVE.is_match(line) {
            continue;
        }

        lines.push(line);
    }

    let cleaned = lines.join(" ");
    let cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ");
    let cleaned = cleaned.trim();

    if cleaned.chars().count() < 2 {
        return String::new();
    }
    cleaned.to_string()
}

/// Collapses any run of whitespace into a single space.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drops blank and repeated comments, keeping the first occurrence in order.
/// Repeated identical reviews would otherwise bias the summary.
pub fn dedupe_keep_order<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let key = item.as_ref().trim();
        if key.is_empty() {
            continue;
        }
        if !seen.insert(key.to_string()) {
            continue;
        }
        out.push(item.as_ref().to_string());
    }
    out
}

// ---------------------------------------------------------------------------
// Polite-ending conversion
// ---------------------------------------------------------------------------

static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+|[.!?]+").unwrap());
// The ending must close a word; a mid-word hit like 좋습니다만 is not polite.
static POLITE_ENDING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(습니다|합니다|됩니다|이에요|예요|세요)\b").unwrap());

// Plain declarative endings and their polite forms, matched at sentence end.
const PLAIN_TO_POLITE: &[(&str, &str)] = &[
    ("이다", "입니다"),
    ("같다", "같습니다"),
    ("된다", "됩니다"),
    ("한다", "합니다"),
    ("필요하다", "필요합니다"),
    ("좋다", "좋습니다"),
    ("나쁘다", "나쁩니다"),
    ("많다", "많습니다"),
    ("적다", "적습니다"),
    ("해", "합니다"),
];

fn polite_sentence(sentence: &str) -> String {
    let t = sentence.trim();
    if t.is_empty() {
        return String::new();
    }

    // Already polite; leave it as written.
    if POLITE_ENDING.is_match(t) {
        return t.to_string();
    }

    let mut t = t.to_string();
    for (plain, polite) in PLAIN_TO_POLITE {
        if let Some(stem) = t.strip_suffix(plain) {
            t = format!("{stem}{polite}");
            break;
        }
    }

    if !t.ends_with(['.', '!', '?']) {
        t.push('.');
    }
    t
}

/// Rewrites plain declarative sentence endings into the polite register,
/// sentence by sentence, and makes sure every sentence terminates with
/// punctuation.
pub fn convert_to_polite(text: &str) -> String {
    let s = text.trim();
    if s.is_empty() {
        return String::new();
    }

    let mut out: Vec<String> = Vec::new();
    let mut push_pair = |sentence: &str, sep: &str| {
        let mut polished = polite_sentence(sentence);
        let terminated = polished.ends_with(['.', '!', '?']);
        let sep = sep.trim();
        if !polished.is_empty() {
            // Keep the sentence's own separator attached so rejoining does
            // not open a gap before the punctuation.
            if !sep.is_empty() && !terminated {
                polished.push_str(sep);
            }
            out.push(polished);
        } else if !sep.is_empty() {
            out.push(sep.to_string());
        }
    };

    let mut last = 0;
    for m in SENTENCE_BREAK.find_iter(s) {
        push_pair(&s[last..m.start()], m.as_str());
        last = m.end();
    }
    if last < s.len() {
        push_pair(&s[last..], "");
    }

    let joined = out
        .iter()
        .map(|x| x.trim())
        .filter(|x| !x.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    normalize_whitespace(&joined)
}

// ---------------------------------------------------------------------------
// Spacing repair
// ---------------------------------------------------------------------------

static COMMA_NO_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r",([^\s\d])").unwrap());
static SPACE_BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([.,!?])").unwrap());
static MISSING_SPACE_AFTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([.!?])([^\s.!?])").unwrap());

/// Deterministic spacing repair for model output: collapses whitespace runs
/// and restores the space a comma should carry (digits excluded so numbers
/// like 1,000 survive).
pub fn fix_spacing(text: &str) -> String {
    let s = text.trim();
    if s.is_empty() {
        return String::new();
    }
    let s = COMMA_NO_SPACE.replace_all(s, ", ${1}");
    normalize_whitespace(&s)
}

/// Final punctuation pass: no space before `.,!?`, exactly one space after a
/// sentence terminator.
pub fn finalize_punctuation_spacing(text: &str) -> String {
    let s = text.trim();
    if s.is_empty() {
        return String::new();
    }
    let s = SPACE_BEFORE_PUNCT.replace_all(s, "${1}");
    let s = MISSING_SPACE_AFTER.replace_all(&s, "${1} ${2}");
    normalize_whitespace(&s)
}
