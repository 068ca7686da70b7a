use common::comparison::{FetchTicket, Galleries, GatewayError};
use common::responses::VendorsResponse;

#[derive(Clone)]
pub enum Msg {
    /// The user picked `value` in slot `index`'s control.
    Select { index: usize, value: String },
    VendorFetched {
        ticket: FetchTicket,
        outcome: Result<VendorsResponse, GatewayError>,
    },
    RefreshGalleries,
    GalleriesLoaded { generation: u64, galleries: Galleries },
}
