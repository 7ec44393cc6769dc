//! Поле выбора с поиском: пользователь вводит текст, выбирает опцию,
//! владелец формы получает только идентификатор.

mod config;
mod state;

pub use config::SearchSelectConfig;
pub use state::{
    ChangeEvent, ChangeTarget, Dropdown, SearchSelectState, SelectPhase, NO_OPTIONS_MESSAGE,
};
