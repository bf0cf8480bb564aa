//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Questo modulo organizza i repository in sotto-moduli separati per una migliore manutenibilità.
//! Ogni repository gestisce le operazioni di database per una specifica entità ed è l'unico
//! componente che parla con il database: nessuna validazione, solo accesso ai dati.

// ************************* NOTA SULLE QUERY ************************* //

/*
   Le query usano le funzioni runtime di sqlx (query, query_as, query_scalar) con i bind
   posizionali `?`, così la compilazione non richiede un database raggiungibile.
   Scelta del metodo in base alle righe attese:
   Nessuna          .execute(...)         INSERT/UPDATE/DELETE
   Zero o una       .fetch_optional(...)  lookup per chiave primaria -> Option
   Esattamente una  .fetch_one(...)       aggregati (COUNT)
   Molte            .fetch_all(...)       liste
   Ogni repository riceve il pool in costruzione; ogni scrittura è un'unità di lavoro
   che viene committata prima di ritornare. Le operazioni su più statement aprono
   una transazione esplicita con begin()/commit().
*/

// ************************* MODULI REPOSITORY ************************* //

pub mod asset;
pub mod asset_employee;
pub mod category;
pub mod department;
pub mod employee;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, ReadAll, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use asset::AssetRepository;
pub use asset_employee::AssetEmployeeRepository;
pub use category::CategoryRepository;
pub use department::DepartmentRepository;
pub use employee::EmployeeRepository;
