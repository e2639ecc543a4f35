//! Фиксированный паттерн сетки карточек.
//!
//! Цикл из 10 позиций: 0 tall, 1 wide, 2..4 обычные, 5 wide,
//! 6 tall, 7..9 обычные. Позиция считается только среди видимых
//! карточек, поэтому после каждой смены фильтра раскладка пересчитывается.

use serde::{Deserialize, Serialize};

pub const PATTERN_CYCLE: usize = 10;
pub const TALL_POSITIONS: [usize; 2] = [0, 6];
pub const WIDE_POSITIONS: [usize; 2] = [1, 5];
pub const NORMAL_POSITIONS: [usize; 6] = [2, 3, 4, 7, 8, 9];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    Tall,
    Wide,
    Normal,
}

/// Вариант раскладки для позиции в последовательности видимых карточек
pub fn layout_for_position(index: usize) -> LayoutVariant {
    let position = index % PATTERN_CYCLE;
    if TALL_POSITIONS.contains(&position) {
        LayoutVariant::Tall
    } else if WIDE_POSITIONS.contains(&position) {
        LayoutVariant::Wide
    } else {
        LayoutVariant::Normal
    }
}

/// Раскладка для всех карточек: невидимые получают `None`,
/// видимые нумеруются подряд в порядке обхода.
pub fn arrange<I>(visibility: I) -> Vec<Option<LayoutVariant>>
where
    I: IntoIterator<Item = bool>,
{
    let mut visible_index = 0;
    visibility
        .into_iter()
        .map(|visible| {
            if !visible {
                return None;
            }
            let variant = layout_for_position(visible_index);
            visible_index += 1;
            Some(variant)
        })
        .collect()
}

/// Описание паттерна
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternInfo {
    pub cycle: usize,
    pub wide_positions: Vec<usize>,
    pub tall_positions: Vec<usize>,
    pub normal_positions: Vec<usize>,
}

pub fn pattern_info() -> PatternInfo {
    PatternInfo {
        cycle: PATTERN_CYCLE,
        wide_positions: WIDE_POSITIONS.to_vec(),
        tall_positions: TALL_POSITIONS.to_vec(),
        normal_positions: NORMAL_POSITIONS.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_for_position_cycle() {
        for i in 0..40 {
            let expected = match i % 10 {
                0 | 6 => LayoutVariant::Tall,
                1 | 5 => LayoutVariant::Wide,
                _ => LayoutVariant::Normal,
            };
            assert_eq!(layout_for_position(i), expected, "position {}", i);
        }
        assert_eq!(layout_for_position(16), LayoutVariant::Tall);
        assert_eq!(layout_for_position(25), LayoutVariant::Wide);
    }

    #[test]
    fn test_arrange_skips_hidden_cards() {
        let layout = arrange([true, false, true, true, false, true, true, true, true]);
        assert_eq!(
            layout,
            vec![
                Some(LayoutVariant::Tall),
                None,
                Some(LayoutVariant::Wide),
                Some(LayoutVariant::Normal),
                None,
                Some(LayoutVariant::Normal),
                Some(LayoutVariant::Normal),
                Some(LayoutVariant::Wide),
                Some(LayoutVariant::Tall),
            ]
        );
    }

    #[test]
    fn test_arrange_is_deterministic() {
        let visibility = vec![true, true, false, true, true, true, true, true];
        assert_eq!(arrange(visibility.clone()), arrange(visibility));
    }

    #[test]
    fn test_pattern_info_covers_cycle() {
        let info = pattern_info();
        let mut all: Vec<usize> = info
            .wide_positions
            .iter()
            .chain(&info.tall_positions)
            .chain(&info.normal_positions)
            .copied()
            .collect();
        all.sort_unstable();
        assert_eq!(all, (0..info.cycle).collect::<Vec<_>>());
    }
}
