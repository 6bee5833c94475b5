// SPDX-License-Identifier: MPL-2.0
//! Status panel: the ready and fault variants of the screen.
//!
//! Rendering happens in two steps. [`StatusView::build`] turns the current
//! fault (if any), the measured code size and the code cache into a plain
//! description of what is shown; [`StatusView::view`] turns that description
//! into widgets. The description is what tests inspect.

use crate::barcode::ScannableCode;
use crate::domain::fault::FaultRecord;
use crate::domain::sizing::QrSize;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::image::{FilterMethod, Handle, Image};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

// =============================================================================
// Code Cache
// =============================================================================

/// A scannable code rasterized at a given size, ready for display.
#[derive(Debug, Clone)]
pub struct RenderedCode {
    code: ScannableCode,
    size: QrSize,
    handle: Handle,
}

impl RenderedCode {
    fn new(code: ScannableCode, size: QrSize) -> Self {
        let handle = code.to_handle(size);
        Self { code, size, handle }
    }

    #[must_use]
    pub fn payload(&self) -> &str {
        self.code.payload()
    }

    #[must_use]
    pub fn code(&self) -> &ScannableCode {
        &self.code
    }

    #[must_use]
    pub fn size(&self) -> QrSize {
        self.size
    }

    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}

/// Holds the code for the fault on screen so `view` never re-encodes.
///
/// The module matrix is kept across size changes; only the raster is redone.
#[derive(Debug, Clone, Default)]
pub struct CodeCache {
    entry: Option<RenderedCode>,
}

impl CodeCache {
    /// Brings the cache in line with the payload on screen and the code size.
    ///
    /// A missing payload or size empties the cache.
    ///
    /// # Errors
    ///
    /// Returns the encoding error if the payload cannot be represented; the
    /// cache is left empty in that case.
    pub fn sync(&mut self, payload: Option<&str>, size: Option<QrSize>) -> Result<()> {
        let (Some(payload), Some(size)) = (payload, size) else {
            self.entry = None;
            return Ok(());
        };

        match self.entry.take() {
            Some(entry) if entry.payload() == payload && entry.size == size => {
                self.entry = Some(entry);
            }
            Some(entry) if entry.payload() == payload => {
                self.entry = Some(RenderedCode::new(entry.code, size));
            }
            _ => {
                let code = ScannableCode::encode(payload)?;
                self.entry = Some(RenderedCode::new(code, size));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self) -> Option<&RenderedCode> {
        self.entry.as_ref()
    }
}

// =============================================================================
// Status View
// =============================================================================

/// What goes where the scannable code would be.
#[derive(Debug, Clone)]
pub enum CodeSlot<'a> {
    /// The code image, at its measured size.
    Shown(&'a RenderedCode),
    /// The container has not been measured yet; nothing is drawn.
    AwaitingLayout,
    /// The code could not be produced; the link is shown as text instead.
    Unavailable { link: String },
}

/// Description of the status panel for one frame.
#[derive(Debug, Clone)]
pub enum StatusView<'a> {
    Ready {
        headline: String,
    },
    Fault {
        headline: String,
        message: String,
        prompt: String,
        code: CodeSlot<'a>,
    },
}

impl<'a> StatusView<'a> {
    #[must_use]
    pub fn build(
        i18n: &I18n,
        fault: Option<&FaultRecord>,
        qr_size: Option<QrSize>,
        cache: &'a CodeCache,
    ) -> Self {
        let Some(record) = fault else {
            return StatusView::Ready {
                headline: i18n.tr("status-ready"),
            };
        };

        let code = match (qr_size, cache.get()) {
            (None, _) => CodeSlot::AwaitingLayout,
            (Some(_), Some(rendered)) if rendered.payload() == record.url => {
                CodeSlot::Shown(rendered)
            }
            (Some(_), _) => CodeSlot::Unavailable {
                link: i18n.tr_with_args("status-code-unavailable", &[("url", &record.url)]),
            },
        };

        StatusView::Fault {
            headline: i18n.tr_with_args("status-fault-headline", &[("code", &record.code)]),
            message: record.message.clone(),
            prompt: i18n.tr("status-fault-prompt"),
            code,
        }
    }

    #[must_use]
    pub fn headline(&self) -> &str {
        match self {
            StatusView::Ready { headline } | StatusView::Fault { headline, .. } => headline,
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            StatusView::Ready { .. } => None,
            StatusView::Fault { message, .. } => Some(message),
        }
    }

    /// The code image on screen, if any.
    #[must_use]
    pub fn code(&self) -> Option<&'a RenderedCode> {
        match self {
            StatusView::Fault {
                code: CodeSlot::Shown(rendered),
                ..
            } => Some(rendered),
            _ => None,
        }
    }

    pub fn view<Message: 'a>(self, colors: &ColorScheme) -> Element<'a, Message> {
        let content = match self {
            StatusView::Ready { headline } => Column::new().push(
                Text::new(headline)
                    .size(typography::TITLE_MD)
                    .color(colors.success),
            ),
            StatusView::Fault {
                headline,
                message,
                prompt,
                code,
            } => {
                let column = Column::new()
                    .spacing(spacing::SM)
                    .align_x(alignment::Horizontal::Center)
                    .push(
                        Text::new(headline)
                            .size(typography::TITLE_MD)
                            .color(colors.error),
                    )
                    .push(
                        Text::new(message)
                            .size(typography::BODY_LG)
                            .color(colors.error),
                    )
                    .push(
                        Text::new(prompt)
                            .size(typography::BODY)
                            .color(colors.text_secondary),
                    );

                match code {
                    CodeSlot::Shown(rendered) => column.push(code_image(rendered, colors)),
                    CodeSlot::AwaitingLayout => column,
                    CodeSlot::Unavailable { link } => column.push(
                        Text::new(link)
                            .size(typography::BODY)
                            .color(colors.text_primary),
                    ),
                }
            }
        };

        Container::new(content.align_x(alignment::Horizontal::Center))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }
}

fn code_image<'a, Message: 'a>(
    rendered: &'a RenderedCode,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let side = rendered.size().as_f32();
    let image = Image::new(rendered.handle().clone())
        .width(Length::Fixed(side))
        .height(Length::Fixed(side))
        .filter_method(FilterMethod::Nearest);

    Container::new(image)
        .padding(spacing::XXS)
        .style(styles::container::code_plate(colors.code_plate))
        .into()
}
