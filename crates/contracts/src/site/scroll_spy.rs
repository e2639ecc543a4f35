//! Выбор активной секции для scroll-spy.

/// Вертикальные границы секции относительно вьюпорта
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom > line
    }
}

/// Среди пересекающихся секций, перекрывающих линию `line`, выбирает ту,
/// чей верхний край ближе всего к линии. При равенстве остаётся первая.
pub fn pick_section<I>(candidates: I, line: f64) -> Option<usize>
where
    I: IntoIterator<Item = (usize, SectionBounds)>,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, bounds) in candidates {
        if !bounds.straddles(line) {
            continue;
        }
        let distance = (bounds.top - line).abs();
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

/// Секция, чей верхний край ближе всего к отступу; используется при старте
pub fn nearest_to_offset<I>(tops: I, offset: f64) -> Option<usize>
where
    I: IntoIterator<Item = (usize, f64)>,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, top) in tops {
        let distance = (top - offset).abs();
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

/// Пункт навигации, чей `data-target` совпадает с id секции.
/// Пункты без цели пропускаются, поэтому индексы секций и пунктов не совпадают.
pub fn nav_index_for_section(nav_targets: &[Option<String>], section_id: &str) -> Option<usize> {
    nav_targets
        .iter()
        .position(|target| target.as_deref() == Some(section_id))
}

/// Позиция прокрутки к секции: абсолютный верх минус отступ, не меньше нуля
pub fn scroll_target(absolute_top: f64, offset: f64) -> f64 {
    (absolute_top - offset).max(0.0)
}

pub fn is_desktop(viewport_width: f64, desktop_min_width: f64) -> bool {
    viewport_width > desktop_min_width
}

/// Индекс подсвеченного пункта навигации
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveSection {
    index: Option<usize>,
}

impl ActiveSection {
    /// Возвращает `true`, если активный пункт сменился
    pub fn set(&mut self, index: usize) -> bool {
        if self.index == Some(index) {
            return false;
        }
        self.index = Some(index);
        true
    }

    pub fn get(&self) -> Option<usize> {
        self.index
    }

    pub fn reset(&mut self) {
        self.index = None;
    }
}
