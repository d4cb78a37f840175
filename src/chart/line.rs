//! Line geometry: one curve per series with a dot at each point

use crate::scene::{Circle, Color, Group, Paint, Path, Point};

use super::cartesian::{Frame, Series};
use super::curve;
use super::options::ChartOptions;
use super::types::Record;

/// Pixel points of one series, split into runs at absent values
pub fn segments(records: &[Record], key: &str, frame: &Frame) -> Vec<Vec<Point>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();

    for (record, &x) in records.iter().zip(&frame.xs) {
        match record.get(key) {
            Some(value) => current.push(Point::new(x, frame.y.map(value))),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

pub fn draw(records: &[Record], series: &[Series], frame: &Frame, options: &ChartOptions) -> Group {
    let mut all = Group::new().with_class("lines");

    for s in series {
        let mut group = Group::new().with_class("line-series");
        let color = s.style.color;
        let runs = segments(records, &s.key, frame);

        for run in &runs {
            if run.len() < 2 {
                continue;
            }
            group.push(
                Path::new(Paint::stroke(color, options.line.stroke_width))
                    .extend(curve::open_path(run, options.curve))
                    .with_class("series-line"),
            );
        }

        for point in runs.iter().flatten() {
            group.push(
                Circle::new(
                    *point,
                    options.line.dot_radius,
                    Paint::fill(color).with_stroke(Color::WHITE, 2.0),
                )
                .with_class("dot"),
            );
        }

        all.push(group);
    }

    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::types::ChartKind;

    fn frame(records: &[Record]) -> Frame {
        let values = records.iter().flat_map(|r| r.values.values().copied());
        Frame::new(ChartKind::Line, records.len(), values, &ChartOptions::default())
    }

    #[test]
    fn test_gap_splits_line() {
        let records = vec![
            Record::new("Jan").value("users", 1000.0),
            Record::new("Feb").value("users", 1200.0),
            Record::new("Mar"),
            Record::new("Apr").value("users", 1400.0),
            Record::new("May").value("users", 1600.0),
        ];
        let frame = frame(&records);
        let runs = segments(&records, "users", &frame);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 2);
        assert_eq!(runs[1].len(), 2);
        assert_eq!(runs[1][0].x, frame.xs[3]);
    }

    #[test]
    fn test_higher_values_drawn_higher() {
        let records = vec![
            Record::new("Jan").value("users", 1000.0),
            Record::new("Feb").value("users", 1800.0),
        ];
        let frame = frame(&records);
        let runs = segments(&records, "users", &frame);
        assert!(runs[0][1].y < runs[0][0].y);
    }
}
