// Text layouts for the view models. Each module implements `CreateView`
// (and `CsvExport` where the content is a table) for its view models.

mod catalog;
mod diagnostic;
mod layout;
mod system;
