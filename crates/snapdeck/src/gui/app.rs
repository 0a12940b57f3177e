use crate::config;
use crate::events::AppEvent;
use crate::gui::deck::{self, DEFAULT_HEIGHT, DEFAULT_WIDTH, Deck};
use crate::gui::theme::{self, ThemeColors};
use crate::gui::window;
use gdk4 as gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use kurbo::{Point, Vec2};
use relm4::prelude::*;
use scrollsnap::SnapEvent;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub struct AppModel {
    pub deck: Rc<RefCell<Deck>>,
    pub title: String,
}

#[derive(Debug)]
pub enum AppMsg {
    Event(AppEvent),
    Previous,
    Next,
    DragBegin,
    DragUpdate(Vec2),
    DragEnd,
    Press(Point),
    Release,
    PanelChanged,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        AppMsg::Event(event)
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Deck, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            #[watch]
            set_title: Some(&model.title),
            set_default_width: DEFAULT_WIDTH as i32,
            set_default_height: DEFAULT_HEIGHT as i32,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    match key {
                        gdk::Key::Left | gdk::Key::Up => sender.input(AppMsg::Previous),
                        gdk::Key::Right | gdk::Key::Down => sender.input(AppMsg::Next),
                        gdk::Key::Escape => sender.input(AppMsg::Quit),
                        _ => return glib::Propagation::Proceed,
                    }
                    glib::Propagation::Stop
                }
            },

            gtk::Overlay {
                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,

                    add_controller = gtk::GestureDrag {
                        connect_drag_begin[sender] => move |_, _, _| {
                            sender.input(AppMsg::DragBegin);
                        },
                        connect_drag_update[sender] => move |_, x, y| {
                            sender.input(AppMsg::DragUpdate(Vec2::new(x, y)));
                        },
                        connect_drag_end[sender] => move |_, _, _| {
                            sender.input(AppMsg::DragEnd);
                        }
                    },

                    add_controller = gtk::GestureClick {
                        connect_pressed[sender] => move |_, _, x, y| {
                            sender.input(AppMsg::Press(Point::new(x, y)));
                        },
                        connect_released[sender] => move |_, _, _, _| {
                            sender.input(AppMsg::Release);
                        }
                    }
                },

                add_overlay = &gtk::Button {
                    set_label: "‹",
                    set_halign: gtk::Align::Start,
                    set_valign: gtk::Align::Center,
                    add_css_class: "snapdeck-nav",
                    connect_clicked => AppMsg::Previous,
                },

                add_overlay = &gtk::Button {
                    set_label: "›",
                    set_halign: gtk::Align::End,
                    set_valign: gtk::Align::Center,
                    add_css_class: "snapdeck-nav",
                    connect_clicked => AppMsg::Next,
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (deck, rx) = init;

        theme::load_css();

        let title = window::window_title(deck.title());
        let model = AppModel {
            deck: Rc::new(RefCell::new(deck)),
            title,
        };

        let widgets = view_output!();

        let deck_draw = model.deck.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                if let Err(e) = deck::draw(cr, &deck_draw.borrow(), &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let deck_tick = model.deck.clone();
        let tick_sender = sender.clone();
        let last_frame = Cell::new(None);
        widgets
            .drawing_area
            .add_tick_callback(move |drawing_area, clock| {
                let now = clock.frame_time();
                let dt = window::frame_delta(last_frame.replace(Some(now)), now);

                let events = {
                    let mut deck = deck_tick.borrow_mut();
                    deck.resize(window::widget_size(drawing_area));
                    deck.advance(dt)
                };
                for event in &events {
                    log::debug!("{:?}", event);
                    if matches!(event, SnapEvent::Changed { .. }) {
                        tick_sender.input(AppMsg::PanelChanged);
                    }
                }

                drawing_area.queue_draw();
                glib::ControlFlow::Continue
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        let mut deck = self.deck.borrow_mut();
        match msg {
            AppMsg::Event(AppEvent::Command(command)) => {
                // rejections are logged by the carousel
                let _ = deck.apply(command);
            }
            AppMsg::Event(AppEvent::ConfigReload) => match config::load_config() {
                Ok(new_config) => match deck.reload(&new_config) {
                    Ok(()) => log::info!("Configuration reloaded"),
                    Err(e) => log::error!("Failed to apply config: {}", e),
                },
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            AppMsg::Previous => deck.previous(),
            AppMsg::Next => deck.next(),
            AppMsg::DragBegin => deck.begin_drag(),
            AppMsg::DragUpdate(offset) => deck.drag_to(offset),
            AppMsg::DragEnd => {
                deck.end_drag();
                // a drag can swallow the click release
                deck.release();
            }
            AppMsg::Press(point) => deck.press(point),
            AppMsg::Release => deck.release(),
            AppMsg::PanelChanged => {}
            AppMsg::Quit => relm4::main_application().quit(),
        }
        self.title = window::window_title(deck.title());
    }
}
