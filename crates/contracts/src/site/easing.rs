//! Плавная прокрутка: кубическое ease-in-out по времени.

/// Длительность анимации прокрутки
pub const SCROLL_DURATION_MS: f64 = 800.0;

pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    pub start: f64,
    pub distance: f64,
    pub duration_ms: f64,
}

impl ScrollAnimation {
    /// Анимация к `target_offset - header_height` из текущей позиции
    pub fn towards(current: f64, target_offset: f64, header_height: f64) -> Self {
        Self {
            start: current,
            distance: target_offset - header_height - current,
            duration_ms: SCROLL_DURATION_MS,
        }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Позиция на момент `elapsed_ms` и признак завершения
    pub fn frame(&self, elapsed_ms: f64) -> (f64, bool) {
        let progress = self.progress(elapsed_ms);
        let position = self.start + self.distance * ease_in_out_cubic(progress);
        (position, progress >= 1.0)
    }
}
