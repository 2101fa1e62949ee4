//! Page renderer - turns (selection, content) into HTML
//!
//! Rendering is a pure function of the session's selection and the content
//! loaded for this render. Content is re-read from disk on every call.

mod page;
mod view;

pub use page::{Page, UnknownPage};
pub use view::{resolve, CategoryView, Identified};

use anyhow::Result;
use tera::Context;

use crate::contact::{ContactForm, Notice};
use crate::content::profile::{
    CONTACT_REASONS, HUMAN_PERSPECTIVE, PILLARS, PROJECTS, SKILL_CARDS, TIMELINE,
};
use crate::content::{Collection, ContentEntry, ContentLoader, MarkdownRenderer};
use crate::helpers::{self, encode_segment, full_url_for, url_for};
use crate::session::{Category, SelectionState};
use crate::templates::{
    Action, CollectionCopy, EntryCard, EntryDetail, MenuItem, ModeData, ProjectCard,
    ProjectDetail, SiteData, TemplateRenderer,
};
use crate::Folio;

/// How rendered pages are delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Served live; open/back and the contact form post back to the server
    Interactive { live_reload: bool },
    /// Written to disk by `generate`; selections become plain links
    Static,
}

/// Everything one render needs besides the content on disk
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub page: Page,
    pub selection: &'a SelectionState,
    pub notice: Option<Notice>,
    pub draft: Option<ContactForm>,
    pub output: Output,
}

impl<'a> RenderContext<'a> {
    /// Context without a pending contact form outcome
    pub fn new(page: Page, selection: &'a SelectionState, output: Output) -> Self {
        Self {
            page,
            selection,
            notice: None,
            draft: None,
            output,
        }
    }
}

/// A rendered page
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    /// Category whose selection matched nothing and should be cleared
    pub stale: Option<Category>,
}

/// Renders pages with the embedded templates
pub struct Renderer {
    folio: Folio,
    templates: TemplateRenderer,
    markdown: MarkdownRenderer,
}

impl Renderer {
    /// Create a renderer for a site
    pub fn new(folio: &Folio) -> Result<Self> {
        Ok(Self {
            folio: folio.clone(),
            templates: TemplateRenderer::new()?,
            markdown: MarkdownRenderer::from_config(&folio.config.highlight),
        })
    }

    /// Render one page for the given state
    pub fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderedPage> {
        let mut context = self.base_context(ctx);

        let (template, stale) = match ctx.page {
            Page::Identity => {
                context.insert("pillars", PILLARS);
                context.insert("perspective", HUMAN_PERSPECTIVE);
                ("identity.html", None)
            }
            Page::Experience => {
                context.insert("timeline", TIMELINE);
                context.insert("skill_cards", SKILL_CARDS);
                ("experience.html", None)
            }
            Page::Projects => ("projects.html", self.projects_view(ctx, &mut context)),
            Page::Blog => (
                "collection.html",
                self.collection_view(ctx, Collection::Articles, &mut context)?,
            ),
            Page::Papers => (
                "collection.html",
                self.collection_view(ctx, Collection::Papers, &mut context)?,
            ),
        };

        if let Some(category) = stale {
            tracing::info!(
                "Selected {:?} {:?} no longer exists",
                category,
                ctx.selection.get(category).unwrap_or_default()
            );
        }

        let html = self.templates.render(template, &context)?;
        Ok(RenderedPage { html, stale })
    }

    /// Render the 404 page
    pub fn render_not_found(&self, path: &str, output: Output) -> Result<String> {
        let selection = SelectionState::new();
        let ctx = RenderContext::new(Page::Identity, &selection, output);
        let mut context = self.base_context(&ctx);
        context.insert("site", &self.site_data(None));
        context.insert("path", path);
        self.templates.render("not_found.html", &context)
    }

    fn base_context(&self, ctx: &RenderContext<'_>) -> Context {
        let mut context = Context::new();
        context.insert("site", &self.site_data(Some(ctx.page)));
        context.insert(
            "mode",
            &ModeData {
                interactive: matches!(ctx.output, Output::Interactive { .. }),
                live_reload: matches!(ctx.output, Output::Interactive { live_reload: true }),
                page: ctx.page.slug().to_string(),
                contact_action: self.url("contact"),
            },
        );
        context.insert("notice", &ctx.notice);
        context.insert("draft", &ctx.draft.clone().unwrap_or_default());
        context.insert("contact_reasons", CONTACT_REASONS);
        context
    }

    fn site_data(&self, active: Option<Page>) -> SiteData {
        let config = &self.folio.config;
        SiteData {
            title: config.title.clone(),
            author: config.author.clone(),
            role: config.role.clone(),
            tagline: config.tagline.clone(),
            bio: config.bio.clone(),
            language: config.language.clone(),
            root: config.root.clone(),
            canonical: full_url_for(
                config,
                &active.map(|p| format!("{}/", p.slug())).unwrap_or_default(),
            ),
            stylesheet: self.url("style.css"),
            profile_image: self.folio.profile_image().map(|p| self.url(&p)),
            social: config.social.clone(),
            copyright_year: config.copyright_year(),
            menu: self.menu(active),
        }
    }

    fn menu(&self, active: Option<Page>) -> Vec<MenuItem> {
        Page::ALL
            .iter()
            .map(|&page| MenuItem {
                label: page.label(&self.folio.config).to_string(),
                path: self.url(&format!("{}/", page.slug())),
                active: Some(page) == active,
            })
            .collect()
    }

    fn url(&self, path: &str) -> String {
        url_for(&self.folio.config, path)
    }

    /// Open affordance for an item of `page`
    fn open_action(&self, ctx: &RenderContext<'_>, page: Page, id: &str, label: String) -> Action {
        match ctx.output {
            Output::Interactive { .. } => Action {
                url: self.url(&format!("{}/open", page.slug())),
                label,
                id: Some(id.to_string()),
            },
            Output::Static => Action {
                url: self.url(&format!("{}/{}/", page.slug(), encode_segment(id))),
                label,
                id: Some(id.to_string()),
            },
        }
    }

    /// Back affordance of `page`
    fn back_action(&self, ctx: &RenderContext<'_>, page: Page, label: &str) -> Action {
        let url = match ctx.output {
            Output::Interactive { .. } => self.url(&format!("{}/back", page.slug())),
            Output::Static => self.url(&format!("{}/", page.slug())),
        };
        Action {
            url,
            label: label.to_string(),
            id: None,
        }
    }

    fn projects_view(&self, ctx: &RenderContext<'_>, context: &mut Context) -> Option<Category> {
        let category = Category::Project;
        let view = resolve(ctx.selection.mode(category), PROJECTS);
        context.insert("view", view.kind());
        let stale = view.is_stale().then_some(category);

        match view {
            CategoryView::Empty => {}
            CategoryView::List(items) | CategoryView::Missing { items, .. } => {
                let cards: Vec<ProjectCard> = items
                    .iter()
                    .map(|record| ProjectCard {
                        record,
                        open: self.open_action(
                            ctx,
                            Page::Projects,
                            record.id,
                            format!("View Project: {}", record.title),
                        ),
                    })
                    .collect();
                context.insert("items", &cards);
            }
            CategoryView::Detail(record) => {
                context.insert(
                    "detail",
                    &ProjectDetail {
                        record,
                        back: self.back_action(ctx, Page::Projects, "← Back to all projects"),
                    },
                );
            }
        }

        stale
    }

    fn collection_view(
        &self,
        ctx: &RenderContext<'_>,
        collection: Collection,
        context: &mut Context,
    ) -> Result<Option<Category>> {
        let category = Category::from(collection);
        let page = Page::for_category(category);
        let copy = collection_copy(collection, page.label(&self.folio.config));

        let entries = ContentLoader::new(&self.folio).load(collection)?;
        let view = resolve(ctx.selection.mode(category), &entries);
        context.insert("view", view.kind());

        match &view {
            CategoryView::Empty => {}
            CategoryView::List(items) | CategoryView::Missing { items, .. } => {
                let cards: Vec<EntryCard> = items
                    .iter()
                    .map(|entry| self.entry_card(ctx, collection, page, entry))
                    .collect();
                context.insert("items", &cards);
            }
            CategoryView::Detail(entry) => {
                let back_label = match collection {
                    Collection::Articles => "← Back to all articles",
                    Collection::Papers => "← Back to all papers",
                };
                context.insert(
                    "detail",
                    &EntryDetail {
                        id: entry.identifier.clone(),
                        title: entry.title.clone(),
                        content: self.markdown.render(entry.body())?,
                        back: self.back_action(ctx, page, back_label),
                    },
                );
            }
        }

        context.insert("copy", &copy);
        Ok(view.is_stale().then_some(category))
    }

    fn entry_card(
        &self,
        ctx: &RenderContext<'_>,
        collection: Collection,
        page: Page,
        entry: &ContentEntry,
    ) -> EntryCard {
        let (default_date, prompt) = match collection {
            Collection::Articles => ("Recent", "Click to read more..."),
            Collection::Papers => ("Research Paper", "Click to read the full paper..."),
        };

        EntryCard {
            id: entry.identifier.clone(),
            title: entry.title.clone(),
            date_label: entry
                .date()
                .map(|d| helpers::full_date(&d))
                .unwrap_or_else(|| default_date.to_string()),
            summary: entry.summary().unwrap_or_else(|| prompt.to_string()),
            tags: entry.tags().to_vec(),
            open: self.open_action(ctx, page, &entry.identifier, format!("Read: {}", entry.title)),
        }
    }
}

/// Headings and fixed copy of a collection page
fn collection_copy(collection: Collection, label: &str) -> CollectionCopy {
    match collection {
        Collection::Articles => CollectionCopy {
            heading: label.to_string(),
            intro: "Thoughts on AI, engineering, and building the future.",
            empty_notice: "Articles coming soon. Check back for insights on AI engineering and technical strategy.",
            missing_notice: "That article is no longer available.",
        },
        Collection::Papers => CollectionCopy {
            heading: "Research & Concept Papers".to_string(),
            intro: "Strategic frameworks, research, and deep-dive analyses on AI transformation and technical architecture.",
            empty_notice: "Papers coming soon. Check back for in-depth research and strategic frameworks.",
            missing_notice: "That paper is no longer available.",
        },
    }
}
