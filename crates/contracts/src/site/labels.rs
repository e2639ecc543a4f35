//! Сопоставление подписей кнопок фильтров с типами карточек.
//!
//! Эвристика подстрок сохранена как есть: текст кнопки приводится к нижнему
//! регистру, и при нескольких совпадениях побеждает последнее. Порядок
//! перебора задаётся порядком в конфигурации или порядком появления типов.

use std::collections::BTreeMap;

use super::cards::ALL_TYPE;

/// Тип фильтра по тексту нажатой кнопки.
///
/// Если `filter_types` (подпись → тип) не пуст, ищем по нему, иначе по
/// типам, найденным в карточках. Без совпадений возвращается `all`.
pub fn resolve_filter_type(
    button_text: &str,
    filter_types: &[(String, String)],
    available_types: &[String],
) -> String {
    let text = button_text.to_lowercase();
    let mut filter_type = ALL_TYPE.to_string();

    if !filter_types.is_empty() {
        for (label, mapped) in filter_types {
            if text.contains(&label.to_lowercase()) {
                filter_type = mapped.clone();
            }
        }
    } else {
        for card_type in available_types {
            if card_type != ALL_TYPE && text.contains(&card_type.to_lowercase()) {
                filter_type = card_type.clone();
            }
        }
    }

    filter_type
}

/// Ведёт ли кнопка с данным текстом к указанному типу фильтра
pub fn label_selects_type(button_text: &str, filter_types: &[(String, String)], filter_type: &str) -> bool {
    let text = button_text.to_lowercase();
    if filter_types.is_empty() {
        return text.contains(&filter_type.to_lowercase());
    }
    filter_types
        .iter()
        .any(|(label, mapped)| text.contains(&label.to_lowercase()) && mapped == filter_type)
}

/// Счётчик, который нужно показать на кнопке, или `None`, если кнопка не
/// сопоставилась ни с одним типом.
///
/// Кнопка с `all` в тексте всегда получает общее число. Затем перебираются
/// подписи из `type_mapping` (тип → подпись, последнее совпадение побеждает),
/// затем, если ничего не нашлось, сами имена типов (первое совпадение).
pub fn count_for_button(
    button_text: &str,
    counts: &BTreeMap<String, usize>,
    available_types: &[String],
    type_mapping: &[(String, String)],
) -> Option<usize> {
    let text = button_text.to_lowercase();

    if text.contains(ALL_TYPE) {
        return counts.get(ALL_TYPE).copied();
    }

    let mut matched = None;
    for card_type in available_types.iter().filter(|t| t.as_str() != ALL_TYPE) {
        let search = type_mapping
            .iter()
            .find(|(t, _)| t == card_type)
            .map(|(_, label)| label.to_lowercase())
            .unwrap_or_else(|| card_type.to_lowercase());

        if text.contains(&search) {
            if let Some(&count) = counts.get(card_type) {
                matched = Some(count);
            }
        }
    }

    if matched.is_some() {
        return matched;
    }

    available_types
        .iter()
        .filter(|t| t.as_str() != ALL_TYPE)
        .filter(|t| text.contains(&t.to_lowercase()))
        .find_map(|t| counts.get(t).copied())
}

/// Заменяет первую группу `(<цифры>)` в тексте на `(<count>)`.
/// Текст без такой группы возвращается без изменений.
pub fn replace_count_suffix(text: &str, count: usize) -> String {
    let bytes = text.as_bytes();
    let mut start = 0;
    while let Some(offset) = text[start..].find('(') {
        let open = start + offset;
        let digits_end = bytes[open + 1..]
            .iter()
            .position(|b| !b.is_ascii_digit())
            .map(|p| open + 1 + p)
            .unwrap_or(bytes.len());
        if digits_end > open + 1 && bytes.get(digits_end) == Some(&b')') {
            return format!("{}({}){}", &text[..open], count, &text[digits_end + 1..]);
        }
        start = open + 1;
    }
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    fn types(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn office_filter_types() -> Vec<(String, String)> {
        pairs(&[
            ("all", "all"),
            ("business centers", "business-center"),
            ("coworkings", "coworking"),
        ])
    }

    #[test]
    fn test_resolve_with_configured_labels() {
        let available = types(&["all", "business-center", "coworking"]);
        assert_eq!(
            resolve_filter_type("Business centers (12)", &office_filter_types(), &available),
            "business-center"
        );
        assert_eq!(
            resolve_filter_type("Coworkings (3)", &office_filter_types(), &available),
            "coworking"
        );
        assert_eq!(resolve_filter_type("All (15)", &office_filter_types(), &available), "all");
        assert_eq!(resolve_filter_type("Other", &office_filter_types(), &available), "all");
    }

    #[test]
    fn test_resolve_last_match_wins() {
        let labels = pairs(&[("office", "office"), ("office space", "space")]);
        assert_eq!(resolve_filter_type("Office space", &labels, &[]), "space");
        let labels = pairs(&[("office space", "space"), ("office", "office")]);
        assert_eq!(resolve_filter_type("Office space", &labels, &[]), "office");
    }

    #[test]
    fn test_resolve_dynamic_types() {
        let available = types(&["all", "loft", "studio"]);
        assert_eq!(resolve_filter_type("Studio (4)", &[], &available), "studio");
        assert_eq!(resolve_filter_type("Everything", &[], &available), "all");
    }

    #[test]
    fn test_label_selects_type() {
        assert!(label_selects_type("Coworkings (3)", &office_filter_types(), "coworking"));
        assert!(!label_selects_type("Coworkings (3)", &office_filter_types(), "business-center"));
        assert!(label_selects_type("Loft", &[], "loft"));
    }

    #[test]
    fn test_count_for_button() {
        let available = types(&["all", "business-center", "coworking"]);
        let mut counts = BTreeMap::new();
        counts.insert("all".to_string(), 15);
        counts.insert("business-center".to_string(), 12);
        counts.insert("coworking".to_string(), 3);
        let mapping = pairs(&[("business-center", "business center"), ("coworking", "coworking")]);

        assert_eq!(count_for_button("All (0)", &counts, &available, &mapping), Some(15));
        assert_eq!(count_for_button("Business centers (0)", &counts, &available, &mapping), Some(12));
        assert_eq!(count_for_button("Coworkings (0)", &counts, &available, &mapping), Some(3));
        assert_eq!(count_for_button("Lofts (0)", &counts, &available, &mapping), None);
        // без маппинга срабатывает проверка по имени типа
        assert_eq!(count_for_button("business-center (0)", &counts, &available, &[]), Some(12));
    }

    #[test]
    fn test_count_falls_back_to_raw_types_first_match() {
        let available = types(&["all", "loft", "loft-studio"]);
        let mut counts = BTreeMap::new();
        counts.insert("all".to_string(), 6);
        counts.insert("loft".to_string(), 4);
        counts.insert("loft-studio".to_string(), 2);
        // подписи не совпадают с текстом кнопки
        let mapping = pairs(&[("loft", "xx"), ("loft-studio", "yy")]);

        // "loft" стоит раньше и тоже входит в текст, поэтому побеждает он
        assert_eq!(count_for_button("Loft-studio (0)", &counts, &available, &mapping), Some(4));
        let reordered = types(&["all", "loft-studio", "loft"]);
        assert_eq!(count_for_button("Loft-studio (0)", &counts, &reordered, &mapping), Some(2));
    }

    #[test]
    fn test_replace_count_suffix() {
        assert_eq!(replace_count_suffix("Coworkings (0)", 3), "Coworkings (3)");
        assert_eq!(replace_count_suffix("All (12) (4)", 7), "All (7) (4)");
        assert_eq!(replace_count_suffix("Offices (new) (2)", 5), "Offices (new) (5)");
        assert_eq!(replace_count_suffix("Offices", 5), "Offices");
        assert_eq!(replace_count_suffix("Offices ()", 5), "Offices ()");
    }
}
