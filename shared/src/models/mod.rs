//! Wire models
//!
//! One module per upstream resource. Field names match the upstream JSON
//! exactly; the BFF never reshapes an entity, it only relays it.

pub mod bloqueo;
pub mod cancha;
pub mod complejo;
pub mod denuncia;
pub mod disponibilidad;
pub mod favorito;
pub mod grupo;
pub mod horario;
pub mod promocion;
pub mod resena;
pub mod reserva;
pub mod usuario;

pub use bloqueo::BloqueoTemporal;
pub use cancha::{Cancha, CanchaListQuery};
pub use complejo::{
    CambioEstadoComplejo, Complejo, ComplejoCreate, ComplejoDetalle, ComplejoListQuery,
    ComplejoUpdate, ResumenComplejo,
};
pub use denuncia::{Denuncia, DenunciaCreate, DenunciaEstado, DenunciaListQuery, DenunciaUpdate};
pub use disponibilidad::{
    ConsultaDisponibilidad, DisponibilidadCancha, DisponibilidadComplejo, DisponibilidadDia,
    DisponibilidadSlot, EstadisticasOcupacion, VerificacionRespuesta, VerificacionSlot,
};
pub use favorito::{ConteoFavoritos, EsFavorito, Favorito, FavoritoClave, FavoritoCreate,
    FavoritoListQuery};
pub use grupo::{
    Grupo, GrupoCreate, GrupoListQuery, GrupoUpdate, Miembro, MiembroCreate, MiembroUpdate,
    TransferenciaOwner,
};
pub use horario::{Horario, HorarioCreate, HorarioListQuery, HorarioUpdate};
pub use promocion::{
    PromoEstado, PromoEvalRequest, PromoEvalResponse, PromoTipo, Promocion, PromocionCreate,
    PromocionListQuery, PromocionUpdate, evaluar_promocion,
};
pub use resena::{Resena, ResenaCreate, ResenaListQuery, ResenaUpdate, ReporteResena};
pub use reserva::{
    CancelacionReserva, Reserva, ReservaCreate, ReservaEstado, ReservaListQuery, ReservaUpdate,
};
pub use usuario::{Usuario, UsuarioCreate, UsuarioListQuery, UsuarioUpdate};
