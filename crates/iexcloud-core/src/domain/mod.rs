pub mod epoch_time;
pub mod models;

pub use epoch_time::EpochTime;
pub use models::{
    BidAsk, Book, DelayedQuote, HistoricalPrice, IntradayPrice, LargestTrade, Metadata, Ohlc,
    OpenClose, PreviousDayPrice, Quote, SystemEvent, Trade, VolumeByVenue,
};
