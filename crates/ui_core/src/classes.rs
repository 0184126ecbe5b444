//! Utility-class merging with last-wins-per-property-group semantics.
//!
//! Two classes conflict when they drive the same CSS property group under
//! the same modifier chain: `px-5` and `px-0` collide while `px-5` and
//! `text-lg` coexist. Conflicts resolve in favor of the later class.
//! Classes whose prefix is not in the registry form their own singleton
//! group and never collide with anything else.

/// Utility prefixes mapped to the property group they drive. Longest
/// prefix wins, so `min-w-` is matched before `m-` would be considered.
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("min-w-", "min-width"),
    ("min-h-", "min-height"),
    ("max-w-", "max-width"),
    ("max-h-", "max-height"),
    ("w-", "width"),
    ("h-", "height"),
    ("px-", "padding-x"),
    ("py-", "padding-y"),
    ("pt-", "padding-top"),
    ("pb-", "padding-bottom"),
    ("pl-", "padding-left"),
    ("pr-", "padding-right"),
    ("p-", "padding"),
    ("mx-", "margin-x"),
    ("my-", "margin-y"),
    ("mt-", "margin-top"),
    ("mb-", "margin-bottom"),
    ("ml-", "margin-left"),
    ("mr-", "margin-right"),
    ("m-", "margin"),
    ("gap-", "gap"),
    ("bg-", "background"),
    ("rounded-", "radius"),
    ("shadow-", "shadow"),
    ("opacity-", "opacity"),
    ("z-", "z-index"),
    ("font-", "font-weight"),
    ("leading-", "leading"),
    ("tracking-", "tracking"),
    ("duration-", "duration"),
    ("ease-", "easing"),
    ("cursor-", "cursor"),
    ("overflow-x-", "overflow-x"),
    ("overflow-y-", "overflow-y"),
    ("overflow-", "overflow"),
    ("justify-", "justify"),
    ("items-", "items"),
];

/// Font-size suffixes distinguishing `text-lg` from `text-primary-600`.
const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl",
];

/// Alignment suffixes distinguishing `text-center` from `text-gray-900`.
const TEXT_ALIGNMENTS: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

fn is_width_value(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit()) || value.starts_with('[')
}

fn border_group(rest: &str) -> String {
    for side in ["t", "b", "l", "r", "x", "y"] {
        if rest == side {
            return format!("border-width-{side}");
        }
        if let Some(value) = rest.strip_prefix(side).and_then(|r| r.strip_prefix('-')) {
            if is_width_value(value) {
                return format!("border-width-{side}");
            }
        }
    }
    if is_width_value(rest) {
        return "border-width".to_string();
    }
    if BORDER_STYLES.contains(&rest) {
        return "border-style".to_string();
    }
    "border-color".to_string()
}

fn utility_group(utility: &str) -> String {
    if utility == "rounded" {
        return "radius".to_string();
    }
    if utility == "shadow" {
        return "shadow".to_string();
    }
    if utility == "border" {
        return "border-width".to_string();
    }
    if utility == "ring" {
        return "ring-width".to_string();
    }
    if utility == "ring-inset" {
        return "ring-inset".to_string();
    }
    if let Some(rest) = utility.strip_prefix("text-") {
        return if TEXT_SIZES.contains(&rest) {
            "font-size".to_string()
        } else if TEXT_ALIGNMENTS.contains(&rest) {
            "text-align".to_string()
        } else {
            "text-color".to_string()
        };
    }
    if let Some(rest) = utility.strip_prefix("border-") {
        return border_group(rest);
    }
    if let Some(rest) = utility.strip_prefix("ring-offset-") {
        return if is_width_value(rest) {
            "ring-offset-width".to_string()
        } else {
            "ring-offset-color".to_string()
        };
    }
    if let Some(rest) = utility.strip_prefix("ring-") {
        return if is_width_value(rest) {
            "ring-width".to_string()
        } else {
            "ring-color".to_string()
        };
    }

    let mut best: Option<(&str, &str)> = None;
    for (prefix, group) in PREFIX_GROUPS {
        if utility.starts_with(prefix) {
            match best {
                Some((current, _)) if current.len() >= prefix.len() => {}
                _ => best = Some((prefix, group)),
            }
        }
    }

    match best {
        Some((_, group)) => group.to_string(),
        None => utility.to_string(),
    }
}

/// Returns the conflict key for one class token. The key combines the
/// modifier chain (`hover:`, `focus-visible:`, ...) with the property
/// group of the final utility, so `hover:bg-primary-500` collides with
/// `hover:bg-primary-100` but not with `bg-primary-600`.
pub fn conflict_group(token: &str) -> String {
    match token.rfind(':') {
        Some(split) => {
            let (modifiers, utility) = token.split_at(split + 1);
            format!("{modifiers}{}", utility_group(utility))
        }
        None => utility_group(token),
    }
}

/// Merges whitespace-separated class lists in order, resolving conflicts
/// with last-wins-per-property-group semantics. Survivor order follows
/// the input order of the surviving tokens.
pub fn merge_class_lists(lists: &[&str]) -> String {
    let tokens: Vec<&str> = lists
        .iter()
        .flat_map(|list| list.split_whitespace())
        .collect();
    merge_classes(&tokens)
}

/// Merges individual class tokens in order with last-wins-per-group
/// conflict resolution.
pub fn merge_classes(tokens: &[&str]) -> String {
    let mut survivors: Vec<&str> = Vec::with_capacity(tokens.len());
    let mut groups: Vec<String> = Vec::with_capacity(tokens.len());

    for token in tokens {
        if token.is_empty() {
            continue;
        }
        let group = conflict_group(token);
        if let Some(existing) = groups.iter().position(|g| *g == group) {
            survivors.remove(existing);
            groups.remove(existing);
        }
        survivors.push(token);
        groups.push(group);
    }

    survivors.join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn later_width_utility_wins() {
        assert_eq!(merge_class_lists(&["w-full", "w-8"]), "w-8");
    }

    #[test]
    fn color_and_width_both_survive() {
        assert_eq!(
            merge_class_lists(&["text-primary-600 w-full"]),
            "text-primary-600 w-full"
        );
    }

    #[test]
    fn font_size_and_text_color_do_not_collide() {
        assert_eq!(
            merge_class_lists(&["text-sm text-primary-600", "text-lg"]),
            "text-primary-600 text-lg"
        );
    }

    #[test]
    fn modifier_chains_separate_conflict_scopes() {
        assert_eq!(
            merge_class_lists(&["bg-primary-600 hover:bg-primary-500", "hover:bg-primary-100"]),
            "bg-primary-600 hover:bg-primary-100"
        );
    }

    #[test]
    fn border_width_and_border_color_are_distinct() {
        assert_eq!(
            merge_class_lists(&["border-2 border-transparent", "border-primary-600"]),
            "border-2 border-primary-600"
        );
    }

    #[test]
    fn caller_padding_override_replaces_size_padding() {
        assert_eq!(
            merge_class_lists(&["h-12 px-6 text-base", "px-4 py-2"]),
            "h-12 text-base px-4 py-2"
        );
    }

    #[test]
    fn bare_rounded_collides_with_scaled_rounded() {
        assert_eq!(merge_class_lists(&["rounded-lg", "rounded"]), "rounded");
        assert_eq!(merge_class_lists(&["rounded", "rounded-md"]), "rounded-md");
    }

    #[test]
    fn text_alignment_and_text_color_do_not_collide() {
        assert_eq!(
            merge_class_lists(&["text-center text-whitely-50"]),
            "text-center text-whitely-50"
        );
    }

    #[test]
    fn ring_width_survives_a_ring_color() {
        assert_eq!(
            merge_class_lists(&["ring-2 ring-inset", "ring-primary-400"]),
            "ring-2 ring-inset ring-primary-400"
        );
    }

    #[test]
    fn sided_border_width_and_border_color_coexist() {
        assert_eq!(
            merge_class_lists(&["border-b-2 border-gray-200"]),
            "border-b-2 border-gray-200"
        );
        assert_eq!(
            merge_class_lists(&["border-b-[3px] border-transparent", "border-primary-500"]),
            "border-b-[3px] border-primary-500"
        );
    }

    #[test]
    fn overflow_axes_are_distinct_groups() {
        assert_eq!(
            merge_class_lists(&["overflow-hidden overflow-y-auto"]),
            "overflow-hidden overflow-y-auto"
        );
    }

    #[test]
    fn unknown_tokens_never_collide() {
        assert_eq!(
            merge_class_lists(&["logo-item sr-only", "logo-item"]),
            "sr-only logo-item"
        );
    }

    #[test]
    fn empty_fragments_are_skipped() {
        assert_eq!(merge_class_lists(&["", "w-full", ""]), "w-full");
    }

    #[test]
    fn merge_is_deterministic() {
        let input = ["h-12 px-6", "px-0 gap-0", "w-12"];
        assert_eq!(merge_class_lists(&input), merge_class_lists(&input));
    }
}
