pub mod converter;

pub use converter::{
    form_team_to_record, form_to_scoresheet, match_to_form, scoresheet_to_form, FormData,
    FormValue, FormValues,
};
