//! The admin console: one dashboard with a tab per resource. Every mutation
//! is followed by a full refetch of that tab's list; nothing is patched in
//! place.

use std::sync::Arc;
use tracing::info;

use staybite_client::api::{AdminApi, CatalogApi};
use staybite_client::SessionStore;
use staybite_core::booking::{Booking, BookingStatus};
use staybite_core::catalog::{
    FoodCategory, FoodDraft, FoodItem, FoodType, PgDraft, PgListing, PgType, RoomDraft,
    RoomListing, RoomType,
};
use staybite_core::contact::{ContactMessage, ContactStatus};
use staybite_core::forms::split_image_list;

use crate::error::FlowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Bookings,
    Pgs,
    Rooms,
    Food,
    Contacts,
}

/// PG create/edit form. Images are one comma-separated text field, split on
/// submit.
#[derive(Debug, Clone)]
pub struct PgForm {
    pub name: String,
    pub city: String,
    pub location: String,
    pub rent: String,
    pub pg_type: PgType,
    pub images: String,
    pub description: String,
}

impl PgForm {
    fn validate(&self) -> Result<(), FlowError> {
        if self.name.is_empty() || self.city.is_empty() || self.rent.is_empty() {
            return Err(FlowError::validation("Please fill in all required fields"));
        }
        Ok(())
    }

    fn into_draft(self) -> PgDraft {
        PgDraft {
            name: self.name,
            city: self.city,
            location: self.location,
            rent: self.rent,
            pg_type: self.pg_type,
            images: split_image_list(&self.images),
            description: self.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RoomForm {
    pub name: String,
    pub price: String,
    pub city: String,
    pub location: String,
    pub room_type: Option<RoomType>,
    pub images: String,
    pub description: String,
}

impl RoomForm {
    fn validate(&self) -> Result<(), FlowError> {
        if self.name.is_empty() || self.price.is_empty() {
            return Err(FlowError::validation("Please fill in all required fields"));
        }
        Ok(())
    }

    fn into_draft(self) -> RoomDraft {
        RoomDraft {
            name: self.name,
            price: self.price,
            city: self.city,
            location: self.location,
            room_type: self.room_type,
            images: split_image_list(&self.images),
            description: self.description,
        }
    }
}

/// Food create/edit form. Price comes in as text and must parse to a whole
/// number.
#[derive(Debug, Clone)]
pub struct FoodForm {
    pub name: String,
    pub price: String,
    pub food_type: FoodType,
    pub category: FoodCategory,
    pub restaurant_name: String,
    pub phone: String,
    pub location: String,
    pub image: String,
    pub description: String,
}

impl FoodForm {
    fn into_draft(self) -> Result<FoodDraft, FlowError> {
        if self.name.is_empty() || self.price.is_empty() {
            return Err(FlowError::validation("Please fill in all required fields"));
        }
        let price: i64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| FlowError::validation("Price must be a number"))?;

        let opt = |s: String| if s.is_empty() { None } else { Some(s) };
        Ok(FoodDraft {
            name: self.name,
            price,
            food_type: self.food_type,
            category: self.category,
            restaurant_name: opt(self.restaurant_name),
            phone: opt(self.phone),
            location: opt(self.location),
            image: self.image,
            description: self.description,
        })
    }
}

pub struct AdminConsole {
    admin: Arc<dyn AdminApi>,
    // Listing reads go through the same public endpoints the storefront uses.
    catalog: Arc<dyn CatalogApi>,
    session: Arc<SessionStore>,
    tab: AdminTab,
    bookings: Vec<Booking>,
    pgs: Vec<PgListing>,
    rooms: Vec<RoomListing>,
    food: Vec<FoodItem>,
    contacts: Vec<ContactMessage>,
}

impl AdminConsole {
    pub fn new(
        admin: Arc<dyn AdminApi>,
        catalog: Arc<dyn CatalogApi>,
        session: Arc<SessionStore>,
    ) -> Self {
        Self {
            admin,
            catalog,
            session,
            tab: AdminTab::default(),
            bookings: Vec::new(),
            pgs: Vec::new(),
            rooms: Vec::new(),
            food: Vec::new(),
            contacts: Vec::new(),
        }
    }

    /// The dashboard is role-gated client-side; the server re-checks every
    /// call anyway.
    fn require_admin(&self) -> Result<String, FlowError> {
        let session = self.session.session().ok_or_else(|| FlowError::LoginRequired {
            message: "Please login to access the admin dashboard".to_owned(),
            redirect_to_sign_in: true,
        })?;
        if !session.user.is_admin() {
            return Err(FlowError::validation("Admin access required"));
        }
        Ok(session.token)
    }

    pub fn tab(&self) -> AdminTab {
        self.tab
    }

    pub async fn open_tab(&mut self, tab: AdminTab) -> Result<(), FlowError> {
        self.tab = tab;
        self.refresh().await
    }

    /// Refetch the current tab's list from scratch.
    pub async fn refresh(&mut self) -> Result<(), FlowError> {
        match self.tab {
            AdminTab::Bookings => {
                let token = self.require_admin()?;
                self.bookings = self.admin.all_bookings(&token).await?;
            }
            AdminTab::Pgs => {
                self.require_admin()?;
                self.pgs = self.catalog.list_pgs().await?;
            }
            AdminTab::Rooms => {
                self.require_admin()?;
                self.rooms = self.catalog.list_rooms().await?;
            }
            AdminTab::Food => {
                self.require_admin()?;
                self.food = self.catalog.list_food().await?;
            }
            AdminTab::Contacts => {
                let token = self.require_admin()?;
                self.contacts = self.admin.list_contacts(&token).await?;
            }
        }
        Ok(())
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn pgs(&self) -> &[PgListing] {
        &self.pgs
    }

    pub fn rooms(&self) -> &[RoomListing] {
        &self.rooms
    }

    pub fn food(&self) -> &[FoodItem] {
        &self.food
    }

    pub fn contacts(&self) -> &[ContactMessage] {
        &self.contacts
    }

    /// Confirm or cancel a booking. Buttons only render while the booking is
    /// PENDING (plus cancel on CONFIRMED), so an illegal transition is a
    /// silent no-op rather than an error.
    pub async fn set_booking_status(
        &mut self,
        id: &str,
        status: BookingStatus,
    ) -> Result<(), FlowError> {
        let token = self.require_admin()?;
        let current = self
            .bookings
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.status)
            .ok_or_else(|| FlowError::validation("Unknown booking"))?;
        if !current.can_transition_to(status) {
            return Ok(());
        }
        self.admin.set_booking_status(&token, id, status).await?;
        info!(booking = %id, %status, "booking status updated");
        self.bookings = self.admin.all_bookings(&token).await?;
        Ok(())
    }

    pub async fn add_pg(&mut self, form: PgForm) -> Result<(), FlowError> {
        let token = self.require_admin()?;
        form.validate()?;
        self.admin.create_pg(&token, &form.into_draft()).await?;
        info!("PG created");
        self.pgs = self.catalog.list_pgs().await?;
        Ok(())
    }

    pub async fn update_pg(&mut self, id: &str, form: PgForm) -> Result<(), FlowError> {
        let token = self.require_admin()?;
        form.validate()?;
        self.admin.update_pg(&token, id, &form.into_draft()).await?;
        info!(pg = %id, "PG updated");
        self.pgs = self.catalog.list_pgs().await?;
        Ok(())
    }

    /// Delete a PG. `confirmed` is the "are you sure?" answer; a declined
    /// dialog means no network call. Returns whether a delete was sent.
    pub async fn delete_pg(&mut self, id: &str, confirmed: bool) -> Result<bool, FlowError> {
        if !confirmed {
            return Ok(false);
        }
        let token = self.require_admin()?;
        self.admin.delete_pg(&token, id).await?;
        info!(pg = %id, "PG deleted");
        self.pgs = self.catalog.list_pgs().await?;
        Ok(true)
    }

    pub async fn add_room(&mut self, form: RoomForm) -> Result<(), FlowError> {
        let token = self.require_admin()?;
        form.validate()?;
        self.admin.create_room(&token, &form.into_draft()).await?;
        info!("room created");
        self.rooms = self.catalog.list_rooms().await?;
        Ok(())
    }

    pub async fn update_room(&mut self, id: &str, form: RoomForm) -> Result<(), FlowError> {
        let token = self.require_admin()?;
        form.validate()?;
        self.admin.update_room(&token, id, &form.into_draft()).await?;
        info!(room = %id, "room updated");
        self.rooms = self.catalog.list_rooms().await?;
        Ok(())
    }

    pub async fn delete_room(&mut self, id: &str, confirmed: bool) -> Result<bool, FlowError> {
        if !confirmed {
            return Ok(false);
        }
        let token = self.require_admin()?;
        self.admin.delete_room(&token, id).await?;
        info!(room = %id, "room deleted");
        self.rooms = self.catalog.list_rooms().await?;
        Ok(true)
    }

    pub async fn add_food(&mut self, form: FoodForm) -> Result<(), FlowError> {
        let token = self.require_admin()?;
        let draft = form.into_draft()?;
        self.admin.create_food(&token, &draft).await?;
        info!("food item created");
        self.food = self.catalog.list_food().await?;
        Ok(())
    }

    pub async fn update_food(&mut self, id: &str, form: FoodForm) -> Result<(), FlowError> {
        let token = self.require_admin()?;
        let draft = form.into_draft()?;
        self.admin.update_food(&token, id, &draft).await?;
        info!(food = %id, "food item updated");
        self.food = self.catalog.list_food().await?;
        Ok(())
    }

    pub async fn delete_food(&mut self, id: &str, confirmed: bool) -> Result<bool, FlowError> {
        if !confirmed {
            return Ok(false);
        }
        let token = self.require_admin()?;
        self.admin.delete_food(&token, id).await?;
        info!(food = %id, "food item deleted");
        self.food = self.catalog.list_food().await?;
        Ok(true)
    }

    /// Move a contact message forward. UNREAD→READ and anything-but-REPLIED
    /// →REPLIED are the only edges; others are silent no-ops, matching the
    /// buttons the console renders.
    pub async fn mark_contact(&mut self, id: &str, next: ContactStatus) -> Result<(), FlowError> {
        let token = self.require_admin()?;
        let current = self
            .contacts
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.status)
            .ok_or_else(|| FlowError::validation("Unknown message"))?;
        if !current.can_mark(next) {
            return Ok(());
        }
        self.admin.set_contact_status(&token, id, next).await?;
        info!(contact = %id, "contact status updated");
        self.contacts = self.admin.list_contacts(&token).await?;
        Ok(())
    }

    pub async fn delete_contact(&mut self, id: &str, confirmed: bool) -> Result<bool, FlowError> {
        if !confirmed {
            return Ok(false);
        }
        let token = self.require_admin()?;
        self.admin.delete_contact(&token, id).await?;
        info!(contact = %id, "contact deleted");
        self.contacts = self.admin.list_contacts(&token).await?;
        Ok(true)
    }
}
