//! Контракты списочных запросов: состояние таблицы из UI, скомпилированный
//! запрос для backend и ответ с пагинацией.

pub mod query;
pub mod request;
pub mod response;

pub use query::*;
pub use request::*;
pub use response::*;
