use dayplan::map::{day_bounds, pins, BoundingBox, Pin, RoutePreview};
use dayplan::navigation::NavigationTarget;
use dayplan::{Coordinate, EventId, Planner, PlannerAction};
use egui::{pos2, Align2, Color32, CornerRadius, FontId, Pos2, Rect, Sense, Shape, Stroke};

use crate::theme;

const PIN_RADIUS: f32 = 14.0;
const DAY_PADDING: f64 = 0.2;
const ROUTE_PADDING: f64 = 0.35;
const GRID_LINES: usize = 8;

fn to_screen(bounds: &BoundingBox, rect: Rect, c: Coordinate) -> Pos2 {
    let [x, y] = bounds.project(c);
    pos2(rect.left() + x * rect.width(), rect.top() + y * rect.height())
}

fn viewport(bounds: BoundingBox, rect: Rect) -> BoundingBox {
    bounds.fit_aspect(rect.width() as f64 / rect.height().max(1.0) as f64)
}

#[profiling::function]
pub fn map_ui(ui: &mut egui::Ui, planner: &Planner, actions: &mut Vec<PlannerAction>) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
    let rect = response.rect;
    let dark = ui.visuals().dark_mode;

    painter.rect_filled(rect, CornerRadius::ZERO, theme::map_background(dark));
    let grid = Stroke::new(0.5, ui.visuals().weak_text_color().gamma_multiply(0.3));
    for i in 1..GRID_LINES {
        let t = i as f32 / GRID_LINES as f32;
        let x = rect.left() + t * rect.width();
        let y = rect.top() + t * rect.height();
        painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], grid);
        painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], grid);
    }

    if let Some(target) = planner.selection().navigation() {
        route_ui(&painter, rect, target);
        return;
    }

    let Some(day) = planner.current_day() else {
        return;
    };

    let pins = pins(day);
    if pins.is_empty() {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No stops on this day",
            FontId::proportional(14.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }

    let bounds = viewport(day_bounds(day, DAY_PADDING), rect);
    let positions: Vec<Pos2> = pins
        .iter()
        .map(|pin| to_screen(&bounds, rect, pin.coordinate))
        .collect();

    painter.add(Shape::line(
        positions.clone(),
        Stroke::new(2.0, theme::PRIMARY.gamma_multiply(0.5)),
    ));

    let selected = planner.selection().selected_event().map(|e| &e.id);
    for (pin, pos) in pins.iter().zip(&positions) {
        pin_shape(&painter, pin, *pos, selected == Some(&pin.id));
    }

    if response.clicked() {
        if let Some(id) = response
            .interact_pointer_pos()
            .and_then(|click| hit_pin(&pins, &positions, click))
        {
            actions.push(PlannerAction::SelectEvent(id.clone()));
        }
    }
}

fn hit_pin<'a>(pins: &'a [Pin], positions: &[Pos2], click: Pos2) -> Option<&'a EventId> {
    pins.iter()
        .zip(positions)
        .map(|(pin, pos)| (pin, pos.distance(click)))
        .filter(|(_, dist)| *dist <= PIN_RADIUS + 4.0)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(pin, _)| &pin.id)
}

fn pin_shape(painter: &egui::Painter, pin: &Pin, pos: Pos2, selected: bool) {
    if selected {
        painter.circle_stroke(pos, PIN_RADIUS + 4.0, Stroke::new(3.0, theme::ACCENT));
    }
    painter.circle_filled(pos, PIN_RADIUS, theme::category_color(pin.category));
    painter.circle_stroke(pos, PIN_RADIUS, Stroke::new(2.0, Color32::WHITE));
    painter.text(
        pos,
        Align2::CENTER_CENTER,
        pin.number.to_string(),
        FontId::proportional(13.0),
        Color32::WHITE,
    );
}

fn route_ui(painter: &egui::Painter, rect: Rect, target: &NavigationTarget) {
    let route = RoutePreview::for_target(target);
    let bounds = viewport(route.bounds(ROUTE_PADDING), rect);
    let points: Vec<Pos2> = route
        .points()
        .iter()
        .map(|c| to_screen(&bounds, rect, *c))
        .collect();

    painter.extend(Shape::dashed_line(
        &points,
        Stroke::new(4.0, theme::ACCENT),
        12.0,
        8.0,
    ));

    let start = points[0];
    painter.circle_filled(start, 10.0, theme::ACCENT);
    painter.circle_filled(start, 4.0, Color32::WHITE);

    let end = points[points.len() - 1];
    painter.circle_filled(end, PIN_RADIUS, theme::PRIMARY);
    painter.text(
        end,
        Align2::CENTER_CENTER,
        "📍",
        FontId::proportional(14.0),
        Color32::WHITE,
    );
    painter.text(
        end + egui::vec2(0.0, PIN_RADIUS + 10.0),
        Align2::CENTER_TOP,
        &target.destination.name,
        FontId::proportional(13.0),
        theme::PRIMARY,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use dayplan::Category;

    fn pin(id: &str, number: usize) -> Pin {
        Pin {
            id: EventId::new(id),
            coordinate: Coordinate::new(40.75, -73.98),
            number,
            category: Category::Food,
        }
    }

    #[test]
    fn click_picks_nearest_pin_in_reach() {
        let pins = [pin("a", 1), pin("b", 2)];
        let positions = [pos2(100.0, 100.0), pos2(120.0, 100.0)];

        assert_eq!(
            hit_pin(&pins, &positions, pos2(113.0, 101.0)).map(|id| id.as_str()),
            Some("b")
        );
        assert_eq!(
            hit_pin(&pins, &positions, pos2(98.0, 99.0)).map(|id| id.as_str()),
            Some("a")
        );
        assert!(hit_pin(&pins, &positions, pos2(300.0, 300.0)).is_none());
    }

    #[test]
    fn projection_stays_inside_rect() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(400.0, 600.0));
        let bounds = viewport(
            BoundingBox::centered(Coordinate::new(40.75, -73.98), 0.02),
            rect,
        );
        let p = to_screen(&bounds, rect, Coordinate::new(40.75, -73.98));
        assert!(rect.contains(p));
        assert!((p.x - 200.0).abs() < 1.0 && (p.y - 300.0).abs() < 1.0);
    }
}
