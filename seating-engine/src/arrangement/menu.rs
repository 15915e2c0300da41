//! Menu option lifecycle

use super::{ArrangementStore, MENU_ID_PREFIX, StoreError, StoreResult};
use crate::utils::validation::{
    MAX_NAME_LEN, validate_color, validate_optional_name, validate_required_text,
};
use shared::arrangement::EventPayload;
use shared::color::palette_color;
use shared::models::{MenuOption, MenuOptionCreate, MenuOptionUpdate};
use shared::util::generate_id;

impl ArrangementStore {
    pub fn add_menu_option(&mut self, input: MenuOptionCreate) -> StoreResult<MenuOption> {
        validate_required_text(&input.name, "name", MAX_NAME_LEN)?;
        let color = match input.color.as_deref() {
            Some(color) => validate_color(color)?,
            None => palette_color(self.menu_options.len()).to_string(),
        };

        let option = MenuOption {
            id: generate_id(MENU_ID_PREFIX),
            name: input.name,
            category: input.category,
            color,
        };
        self.menu_options.push(option.clone());

        tracing::debug!(menu_option_id = %option.id, name = %option.name, "Menu option added");
        self.events.emit(EventPayload::MenuOptionAdded {
            menu_option: option.clone(),
        });
        Ok(option)
    }

    pub fn update_menu_option(
        &mut self,
        id: &str,
        patch: MenuOptionUpdate,
    ) -> StoreResult<MenuOption> {
        let index = self.menu_option_index(id)?;
        validate_optional_name(&patch.name, "name")?;
        let color = patch.color.as_deref().map(validate_color).transpose()?;

        let option = &mut self.menu_options[index];
        if let Some(name) = patch.name {
            option.name = name;
        }
        if let Some(category) = patch.category {
            option.category = category;
        }
        if let Some(color) = color {
            option.color = color;
        }
        let option = option.clone();

        tracing::debug!(menu_option_id = %option.id, "Menu option updated");
        self.events.emit(EventPayload::MenuOptionUpdated {
            menu_option: option.clone(),
        });
        Ok(option)
    }

    /// Remove a menu option no seat has selected
    pub fn remove_menu_option(&mut self, id: &str) -> StoreResult<MenuOption> {
        let index = self.menu_option_index(id)?;
        let in_use = self
            .seats
            .iter()
            .filter(|s| s.menu_option_id.as_deref() == Some(id))
            .count();
        if in_use > 0 {
            tracing::warn!(menu_option_id = %id, in_use, "Remove menu option rejected: still in use");
            return Err(StoreError::MenuOptionInUse {
                id: id.to_string(),
                count: in_use,
            });
        }

        let option = self.menu_options.remove(index);
        tracing::debug!(menu_option_id = %option.id, "Menu option removed");
        self.events.emit(EventPayload::MenuOptionRemoved {
            menu_option: option.clone(),
        });
        Ok(option)
    }
}
