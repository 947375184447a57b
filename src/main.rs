use iced::event::{self, Event};
use iced::task;
use iced::{window, Element, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use std::sync::Arc;

mod classifier;
mod config;
mod error;
mod photo;
mod state;
mod ui;

use classifier::{run_submission, ClassificationService, HttpClassificationService};
use config::{Config, SUPPORTED_IMAGE_EXTENSIONS};
use error::ClassifyError;
use photo::PreviewRegistry;
use state::data::{ClassificationResult, SelectedImage};
use state::UploadClassifyWidget;

/// Main application state
struct PlasticFinder {
    config: Config,
    /// Remote classification service
    service: Arc<dyn ClassificationService>,
    /// Pick/submit/result workflow
    widget: UploadClassifyWidget,
    /// Running request, if any
    in_flight: Option<InFlight>,
    /// Latest file read requested; older reads are discarded
    load_generation: u64,
}

/// A classification request the widget is waiting on
struct InFlight {
    submission: u64,
    /// Aborts the request when dropped
    handle: task::Handle,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked "Choose an Image"
    ChooseImage,
    /// A file was picked or dropped; `None` when the picker was cancelled
    FileChosen(Option<PathBuf>),
    /// Background read/decode of a chosen file finished
    FileLoaded(u64, Result<SelectedImage, ClassifyError>),
    /// User clicked "Find"
    Submit,
    /// Classification request finished
    Classified(u64, Result<ClassificationResult, ClassifyError>),
    /// Copy the product page URL to the clipboard
    CopyProductLink,
}

impl PlasticFinder {
    /// Create a new instance of the application
    fn new(config: Config, service: Arc<dyn ClassificationService>) -> (Self, Task<Message>) {
        (
            PlasticFinder {
                config,
                service,
                widget: UploadClassifyWidget::new(PreviewRegistry::new()),
                in_flight: None,
                load_generation: 0,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ChooseImage => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Choose an Image")
                    .add_filter("Images", &SUPPORTED_IMAGE_EXTENSIONS)
                    .pick_file();

                self.update(Message::FileChosen(file))
            }
            Message::FileChosen(Some(path)) => {
                self.load_generation += 1;
                let generation = self.load_generation;

                Task::perform(photo::loader::load_image(path), move |loaded| {
                    Message::FileLoaded(generation, loaded)
                })
            }
            Message::FileChosen(None) => {
                self.load_generation += 1;
                self.cancel_in_flight();
                self.widget.select_file(None);
                Task::none()
            }
            Message::FileLoaded(generation, loaded) => {
                if generation != self.load_generation {
                    log::debug!("Discarding superseded file read #{}", generation);
                    return Task::none();
                }

                self.cancel_in_flight();
                match loaded {
                    Ok(image) => self.widget.select_file(Some(image)),
                    Err(err) => self.widget.reject_file(err),
                }
                Task::none()
            }
            Message::Submit => {
                let Some(submission) = self.widget.submit() else {
                    return Task::none();
                };

                let id = submission.id;
                let (task, handle) = Task::perform(
                    run_submission(self.service.clone(), submission, self.config.request_timeout),
                    |(id, outcome)| Message::Classified(id, outcome),
                )
                .abortable();
                self.in_flight = Some(InFlight {
                    submission: id,
                    handle: handle.abort_on_drop(),
                });

                task
            }
            Message::Classified(id, outcome) => {
                if self.widget.complete(id, outcome) {
                    self.in_flight = None;
                }
                Task::none()
            }
            Message::CopyProductLink => match self.widget.result() {
                Some(result) => {
                    let url = self.config.product_url(result.identifier());
                    log::info!("📋 Copied {}", url);
                    iced::clipboard::write(url)
                }
                None => Task::none(),
            },
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        ui::view(ui::render(&self.widget, &self.config))
    }

    /// Files dropped onto the window count as a selection
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileDropped(path)) if config::is_supported_image(&path) => {
                Some(Message::FileChosen(Some(path)))
            }
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn cancel_in_flight(&mut self) {
        if let Some(request) = self.in_flight.take() {
            log::info!("✋ Aborting in-flight classification #{}", request.submission);
            request.handle.abort();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load()?;
    let http = HttpClassificationService::new(&config)?;
    log::info!("🔎 Plastic Finder ready, classifying via {}", http.endpoint());
    let service: Arc<dyn ClassificationService> = Arc::new(http);

    iced::application(ui::TITLE, PlasticFinder::update, PlasticFinder::view)
        .subscription(PlasticFinder::subscription)
        .theme(PlasticFinder::theme)
        .window_size((560.0, 760.0))
        .centered()
        .run_with(move || PlasticFinder::new(config, service))?;

    Ok(())
}
