//! The interactive console - the UI shell around a menu session.

mod command;
mod notices;
mod render;

use std::io::{self, Write};

use menu_core::DomainError;
use menu_core::domain::{CategoryFilter, DishInput, Operation, SUGGESTED_IMAGES};
use menu_core::service::{MenuSession, SessionState};
use menu_shared::DishView;
use uuid::Uuid;

use command::{Command, DishRef, FormField, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Holds the session and the contents of the open form between commands.
pub struct Console {
    session: MenuSession,
    form: Option<DishInput>,
}

impl Console {
    pub fn new(session: MenuSession) -> Self {
        Self {
            session,
            form: None,
        }
    }

    pub fn into_session(self) -> MenuSession {
        self.session
    }

    pub fn greet<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Restaurant Menu. Type `help` for commands.")
    }

    /// Parse and run one input line. Parse errors are reported, not returned.
    pub async fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command, out).await,
            Err(ParseError::Empty) => Ok(Flow::Continue),
            Err(e) => {
                writeln!(out, "error: {e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        match command {
            Command::Help => writeln!(out, "{}", render::HELP)?,
            Command::List => self.list(out).await?,
            Command::Export => self.export(out).await?,
            Command::Categories => render::categories(out)?,
            Command::Search(term) => {
                self.session.filter_mut().set_search(&term);
                self.list(out).await?;
            }
            Command::Filter(category) => {
                self.session.filter_mut().set_category(category);
                self.list(out).await?;
            }
            Command::New => self.open_create(out)?,
            Command::Edit(dish) => self.open_edit(dish, out).await?,
            Command::Delete(dish) => self.open_delete(dish, out).await?,
            Command::Submit(fields) => self.submit(fields, out).await?,
            Command::Confirm => self.confirm(out).await?,
            Command::Cancel => {
                self.session.cancel();
                self.form = None;
                writeln!(out, "Closed.")?;
            }
            Command::Suggest(choice) => self.suggest(choice, out)?,
            Command::State => self.state(out)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    async fn list<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.session.visible_dishes().await {
            Ok(dishes) => {
                let views: Vec<DishView> = dishes.iter().map(DishView::from).collect();
                render::listing(out, &views, self.session.filter())
            }
            Err(e) => render::error(out, &e),
        }
    }

    async fn export<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let dishes = match self.session.visible_dishes().await {
            Ok(dishes) => dishes,
            Err(e) => return render::error(out, &e),
        };
        let views: Vec<DishView> = dishes.iter().map(DishView::from).collect();
        let json = serde_json::to_string_pretty(&views).map_err(io::Error::other)?;
        writeln!(out, "{json}")
    }

    fn open_create<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.session.open_create() {
            Ok(()) => {
                self.form = Some(DishInput::default());
                writeln!(out, "Add New Dish. Fill it in with `submit name=... description=... price=... category=... [image=...]`.")
            }
            Err(e) => render::notice(out, &notices::failure(None, &e)),
        }
    }

    async fn open_edit<W: Write>(&mut self, dish: DishRef, out: &mut W) -> io::Result<()> {
        let Some(id) = self.resolve(dish, out).await? else {
            return Ok(());
        };
        match self.session.open_edit(id).await {
            Ok(prefill) => {
                writeln!(out, "Edit Dish. Change fields with `submit field=value ...`:")?;
                render::form(out, &prefill)?;
                self.form = Some(prefill);
                Ok(())
            }
            Err(e) => render::notice(out, &notices::failure(None, &e)),
        }
    }

    async fn open_delete<W: Write>(&mut self, dish: DishRef, out: &mut W) -> io::Result<()> {
        let Some(id) = self.resolve(dish, out).await? else {
            return Ok(());
        };
        match self.session.open_delete(id).await {
            Ok(dish) => writeln!(
                out,
                "Delete \"{}\"? This cannot be undone. Type `confirm` or `cancel`.",
                dish.name
            ),
            Err(e) => render::notice(out, &notices::failure(None, &e)),
        }
    }

    async fn submit<W: Write>(
        &mut self,
        fields: Vec<(FormField, String)>,
        out: &mut W,
    ) -> io::Result<()> {
        let operation = match self.session.state() {
            SessionState::Creating => Some(Operation::Create),
            SessionState::Editing(_) => Some(Operation::Update),
            _ => None,
        };

        let mut input = self.form.clone().unwrap_or_default();
        for (field, value) in &fields {
            field.apply(&mut input, value);
        }
        if operation.is_some() {
            // Keep what was typed so a failed submit can be corrected.
            self.form = Some(input.clone());
        }

        match self.session.submit(input).await {
            Ok(outcome) => {
                self.form = None;
                match notices::submitted(&outcome) {
                    Some(notice) => render::notice(out, &notice),
                    None => Ok(()),
                }
            }
            Err(DomainError::Validation(errors)) => {
                writeln!(out, "Please fix the following:")?;
                render::field_errors(out, &errors)
            }
            Err(e) => render::notice(out, &notices::failure(operation, &e)),
        }
    }

    async fn confirm<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let operation = match self.session.state() {
            SessionState::ConfirmingDelete(_) => Some(Operation::Delete),
            _ => None,
        };
        match self.session.confirm_delete().await {
            Ok(removed) => render::notice(out, &notices::deleted(removed.as_ref())),
            Err(e) => render::notice(out, &notices::failure(operation, &e)),
        }
    }

    fn suggest<W: Write>(&mut self, choice: Option<usize>, out: &mut W) -> io::Result<()> {
        let Some(position) = choice else {
            return render::suggestions(out);
        };
        let Some(url) = position.checked_sub(1).and_then(|i| SUGGESTED_IMAGES.get(i)) else {
            return writeln!(out, "error: no suggested image #{position}");
        };
        match self.form.as_mut() {
            Some(form) => {
                form.image_url = url.to_string();
                writeln!(out, "Image set to {url}")
            }
            None => writeln!(out, "error: open a form with `new` or `edit` first"),
        }
    }

    fn state<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "State: {}", self.session.state())?;
        let filter = self.session.filter();
        if !filter.search().is_empty() {
            writeln!(out, "Search: {}", filter.search())?;
        }
        match filter.category() {
            CategoryFilter::All => writeln!(out, "Category: all")?,
            CategoryFilter::Only(category) => writeln!(out, "Category: {}", category.label())?,
        }
        if let Some(form) = &self.form {
            writeln!(out, "Form:")?;
            render::form(out, form)?;
        }
        Ok(())
    }

    /// Turn a list position into an id using the currently visible dishes.
    async fn resolve<W: Write>(&self, dish: DishRef, out: &mut W) -> io::Result<Option<Uuid>> {
        let position = match dish {
            DishRef::Id(id) => return Ok(Some(id)),
            DishRef::Index(position) => position,
        };
        let dishes = match self.session.visible_dishes().await {
            Ok(dishes) => dishes,
            Err(e) => {
                render::error(out, &e)?;
                return Ok(None);
            }
        };
        match position.checked_sub(1).and_then(|i| dishes.get(i)) {
            Some(dish) => Ok(Some(dish.id)),
            None => {
                writeln!(out, "error: no dish #{position} in the current list")?;
                Ok(None)
            }
        }
    }
}
