//! Plain-text rendering of listings, forms and notices.

use std::io::{self, Write};

use menu_core::DomainError;
use menu_core::domain::{DishCategory, DishInput, SUGGESTED_IMAGES};
use menu_core::error::ValidationErrors;
use menu_core::service::DishFilter;
use menu_shared::{DishView, Notice};

pub const HELP: &str = "\
Commands:
  list                      show the menu (current search and filter apply)
  search [TERM]             search names and descriptions; no term clears
  filter CATEGORY|all       show one category
  categories                list categories
  export                    print the visible dishes as JSON
  new                       open the add-dish form
  edit N|ID                 open the edit form for a dish
  delete N|ID               ask to delete a dish
  submit FIELD=VALUE...     fill in and save the open form
                            fields: name description price category image
  suggest [N]               list suggested images, or use image N in the form
  confirm                   confirm the pending delete
  cancel                    close the open form or dialog
  state                     show what is open
  quit                      leave";

pub fn notice<W: Write>(out: &mut W, notice: &Notice) -> io::Result<()> {
    let marker = if notice.is_destructive() { "!" } else { "*" };
    writeln!(out, "{marker} {}: {}", notice.title, notice.description)
}

pub fn listing<W: Write>(out: &mut W, dishes: &[DishView], filter: &DishFilter) -> io::Result<()> {
    if dishes.is_empty() {
        writeln!(out, "No dishes found")?;
        let hint = if filter.is_active() {
            "Try adjusting your search or filters"
        } else {
            "Add your first dish to get started"
        };
        return writeln!(out, "{hint}");
    }

    for (position, dish) in dishes.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {}  [{}]  ${}",
            position + 1,
            dish.name,
            dish.category_label,
            dish.price
        )?;
        writeln!(out, "    {}", dish.description)?;
        writeln!(out, "    id: {}", dish.id)?;
    }
    Ok(())
}

pub fn form<W: Write>(out: &mut W, form: &DishInput) -> io::Result<()> {
    writeln!(out, "  name:        {}", form.name)?;
    writeln!(out, "  description: {}", form.description)?;
    writeln!(out, "  price:       {:.2}", form.price)?;
    writeln!(out, "  category:    {}", form.category)?;
    writeln!(out, "  image:       {}", form.image_url)
}

pub fn field_errors<W: Write>(out: &mut W, errors: &ValidationErrors) -> io::Result<()> {
    for error in errors.iter() {
        writeln!(out, "  {}: {}", error.field, error.message)?;
    }
    Ok(())
}

pub fn categories<W: Write>(out: &mut W) -> io::Result<()> {
    for category in DishCategory::ALL {
        writeln!(out, "  {:<11} {}", category.as_str(), category.label())?;
    }
    Ok(())
}

pub fn suggestions<W: Write>(out: &mut W) -> io::Result<()> {
    for (position, url) in SUGGESTED_IMAGES.iter().enumerate() {
        writeln!(out, "  {}. {url}", position + 1)?;
    }
    Ok(())
}

/// Errors that are not tied to an operation, such as a failed listing.
pub fn error<W: Write>(out: &mut W, err: &DomainError) -> io::Result<()> {
    writeln!(out, "error: {err}")
}
