use colored::Colorize;
use dialoguer::{Confirm, Input, Select};

use crate::cart::CartLedger;
use crate::catalog::{Catalog, PropertyListing};
use crate::core::checkout::{CheckoutForm, FIELD_EMAIL, FIELD_NAME, FIELD_PAYMENT_DETAILS};
use crate::core::filter::{self, FilterCriteria};
use crate::error::Result;
use crate::logging;

const FILTER_FIELDS: [(&str, &str); 4] = [
    ("location", "Location contains"),
    ("max_price", "Maximum price"),
    ("bedrooms", "Bedrooms (exact)"),
    ("amenity", "Required amenity"),
];

const FORM_FIELDS: [(&str, &str); 3] = [
    (FIELD_NAME, "Name"),
    (FIELD_EMAIL, "Email"),
    (FIELD_PAYMENT_DETAILS, "Payment details"),
];

/// Interactive browsing session: filter the catalog, manage the cart,
/// and walk through checkout. One dialog interaction at a time; every
/// state change lands before the next prompt is shown.
pub struct BrowseCommand {
    catalog: Catalog,
    criteria: FilterCriteria,
    cart: CartLedger,
    verbose: bool,
}

impl BrowseCommand {
    pub fn new(catalog: Catalog, verbose: bool) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::new(),
            cart: CartLedger::new(),
            verbose,
        }
    }

    pub fn execute(&mut self) -> Result<()> {
        println!("{}", "🏠 Property Rental Browser".blue().bold());
        if self.verbose {
            eprintln!(
                "{} Catalog contains {} listing(s)",
                "ℹ".blue(),
                self.catalog.len()
            );
        }

        loop {
            let choices = [
                "Browse listings",
                "Edit filters",
                "View cart",
                "Checkout",
                "Quit",
            ];
            let selection = Select::new()
                .with_prompt("What would you like to do?")
                .items(&choices)
                .default(0)
                .interact()?;

            match selection {
                0 => self.browse_listings()?,
                1 => self.edit_filters()?,
                2 => self.view_cart()?,
                3 => self.run_checkout()?,
                _ => break,
            }
        }

        Ok(())
    }

    fn filtered(&self) -> Vec<PropertyListing> {
        filter::apply(self.catalog.listings(), &self.criteria)
    }

    fn browse_listings(&mut self) -> Result<()> {
        let matches = self.filtered();
        if matches.is_empty() {
            println!("{}", "No listings match the current filters".yellow());
            return Ok(());
        }

        for listing in &matches {
            print_listing_card(listing);
        }

        let book = Confirm::new()
            .with_prompt("Book a listing?")
            .default(false)
            .interact()?;
        if !book {
            return Ok(());
        }

        let labels: Vec<String> = matches.iter().map(listing_label).collect();
        let index = Select::new()
            .with_prompt("Which listing?")
            .items(&labels)
            .interact()?;

        let listing = matches[index].clone();
        let id = listing.id;
        println!(
            "{} Added {} to the cart",
            "✓".green(),
            listing.title.cyan()
        );
        self.cart.add(listing);
        logging::log_cart_change("add", id, self.cart.total());

        Ok(())
    }

    fn edit_filters(&mut self) -> Result<()> {
        println!(
            "{}",
            "Set filters (leave a field empty for no constraint)".blue()
        );

        for (field, prompt) in FILTER_FIELDS {
            let value: String = Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            self.criteria.set_field(field, &value);
            logging::log_filter_change(field, &value);
        }

        println!(
            "{} {} listing(s) match the current filters",
            "ℹ".blue(),
            self.filtered().len()
        );
        Ok(())
    }

    fn view_cart(&mut self) -> Result<()> {
        if self.cart.is_empty() {
            println!("{}", "The cart is empty".yellow());
            return Ok(());
        }

        for listing in self.cart.entries() {
            println!("  {} {} — ${}", "•".blue(), listing.title, listing.price);
        }
        println!("{} Total: ${}", "→".blue(), self.cart.total());

        let remove = Confirm::new()
            .with_prompt("Remove a listing?")
            .default(false)
            .interact()?;
        if !remove {
            return Ok(());
        }

        let labels: Vec<String> = self.cart.entries().iter().map(listing_label).collect();
        let index = Select::new()
            .with_prompt("Which entry?")
            .items(&labels)
            .interact()?;

        let id = self.cart.entries()[index].id;
        let removed = self.cart.remove(id);
        logging::log_cart_change("remove", id, self.cart.total());
        println!(
            "{} Removed {} entr{} — new total ${}",
            "✓".green(),
            removed,
            if removed == 1 { "y" } else { "ies" },
            self.cart.total()
        );

        Ok(())
    }

    fn run_checkout(&mut self) -> Result<()> {
        if self.cart.is_empty() {
            println!("{}", "The cart is empty — nothing to check out".yellow());
            return Ok(());
        }

        println!(
            "{} Checking out {} listing(s), total ${}",
            "→".blue(),
            self.cart.len(),
            self.cart.total()
        );

        let mut form = CheckoutForm::new();
        loop {
            for (field, prompt) in FORM_FIELDS {
                let value: String = Input::new()
                    .with_prompt(prompt)
                    .allow_empty(true)
                    .interact_text()?;
                form.set_field(field, &value);
                if let Some(message) = form.error_for(field) {
                    println!("  {} {}: {}", "✗".red(), field, message);
                }
            }

            logging::log_validation_result(form.errors().len());
            if form.is_submittable() {
                break;
            }

            println!("{}", "The form has errors:".red());
            for (field, message) in form.errors() {
                println!("  {} {}: {}", "✗".red(), field.bold(), message);
            }
            let retry = Confirm::new()
                .with_prompt("Edit the form again?")
                .default(true)
                .interact()?;
            if !retry {
                println!("{}", "Checkout cancelled".yellow());
                return Ok(());
            }
        }

        let total = self.cart.total();
        logging::log_submission(&form.name, &form.email, &form.payment_details, total);
        println!(
            "\n{} Booking confirmed for {} listing(s), total {}",
            "✓".green().bold(),
            self.cart.len(),
            format!("${total}").cyan()
        );
        self.cart.clear();

        Ok(())
    }
}

fn listing_label(listing: &PropertyListing) -> String {
    format!(
        "{} — ${} ({})",
        listing.title, listing.price, listing.location
    )
}

fn print_listing_card(listing: &PropertyListing) {
    println!("\n{}", listing.title.cyan().bold());
    println!("  {}", listing.description);
    println!(
        "  {} ${}  {} {} bedroom(s)  {} {}",
        "Price:".dimmed(),
        listing.price,
        "·".dimmed(),
        listing.bedrooms,
        "·".dimmed(),
        listing.location
    );
    if !listing.amenities.is_empty() {
        println!("  {} {}", "Amenities:".dimmed(), listing.amenities.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::sample_catalog;

    #[test]
    fn test_new_session_starts_clean() {
        let browse = BrowseCommand::new(sample_catalog(), false);
        assert!(browse.criteria.is_unconstrained());
        assert!(browse.cart.is_empty());
    }

    #[test]
    fn test_filtered_respects_criteria() {
        let mut browse = BrowseCommand::new(sample_catalog(), false);
        assert_eq!(browse.filtered().len(), 3);

        browse.criteria.set_field("location", "Seattle");
        let matches = browse.filtered();
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|l| l.location == "Seattle"));
    }

    #[test]
    fn test_listing_label_format() {
        let catalog = sample_catalog();
        let label = listing_label(&catalog.listings()[0]);
        assert_eq!(label, "Harbor View — $300 (Seattle)");
    }
}
