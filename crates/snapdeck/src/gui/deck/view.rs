use super::model::Deck;
use super::{CORNER_RADIUS, DOT_RADIUS, TITLE_SIZE};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use kurbo::Rect;
use palette::Srgba;
use scrollsnap::Panel;
use std::f64::consts::{FRAC_PI_2, PI};

struct PanelRenderer<'a> {
    panel: &'a Panel,
    rect: Rect,
}

impl<'a> PanelRenderer<'a> {
    fn new(panel: &'a Panel, deck: &Deck) -> Self {
        Self {
            panel,
            rect: deck.screen_rect(panel),
        }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        if self.rect.is_zero_area() {
            return Ok(());
        }
        let center = self.rect.center();

        cr.save()?;
        cr.translate(center.x, center.y);
        cr.rotate(self.panel.visual.rotation.z.to_radians());
        cr.translate(-center.x, -center.y);

        self.draw_body(cr)?;
        self.draw_title(cr, colors)?;
        cr.restore()
    }

    fn draw_body(&self, cr: &Context) -> Result<(), cairo::Error> {
        let r = CORNER_RADIUS.min(self.rect.width() / 2.0).min(self.rect.height() / 2.0);
        let Rect { x0, y0, x1, y1 } = self.rect;

        cr.new_sub_path();
        cr.arc(x1 - r, y0 + r, r, -FRAC_PI_2, 0.0);
        cr.arc(x1 - r, y1 - r, r, 0.0, FRAC_PI_2);
        cr.arc(x0 + r, y1 - r, r, FRAC_PI_2, PI);
        cr.arc(x0 + r, y0 + r, r, PI, 3.0 * FRAC_PI_2);
        cr.close_path();

        set_source(cr, self.panel.visual.color);
        cr.fill()
    }

    fn draw_title(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let text = self.panel.key.as_str();
        let text_color = Srgba {
            alpha: colors.text.alpha * self.panel.visual.color.alpha,
            ..colors.text
        };
        set_source(cr, text_color);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(TITLE_SIZE * self.panel.visual.scale.y.abs());
        if let Ok(ext) = cr.text_extents(text) {
            let center = self.rect.center();
            cr.move_to(
                center.x - ext.width() / 2.0 - ext.x_bearing(),
                center.y + ext.height() / 2.0,
            );
            cr.show_text(text)?;
        }
        Ok(())
    }
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

pub fn draw(cr: &Context, deck: &Deck, colors: &ThemeColors) -> Result<(), cairo::Error> {
    set_source(cr, colors.background);
    cr.paint()?;

    // deeper panels first so nearer ones cover them
    let panels = deck.snap().panels();
    let mut order: Vec<&Panel> = panels.iter().collect();
    order.sort_by(|a, b| b.visual.depth.total_cmp(&a.visual.depth));

    for panel in order {
        PanelRenderer::new(panel, deck).draw(cr, colors)?;
    }

    draw_dots(cr, deck, colors)
}

fn draw_dots(cr: &Context, deck: &Deck, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let Some(pagination) = deck.snap().pagination() else {
        return Ok(());
    };
    for (i, toggle) in pagination.toggles().iter().enumerate() {
        let center = deck.dot_center(i);
        set_source(cr, if toggle.on { colors.dot_active } else { colors.dot });
        cr.arc(center.x, center.y, DOT_RADIUS, 0.0, 2.0 * PI);
        cr.fill()?;
    }
    Ok(())
}
