//! Premium data sets, reached through [`IexClient::premium`].
//!
//! Every Wall Street Horizon data set is a time series keyed by symbol; the
//! endpoints differ only in their series id.

use crate::core::{IexClient, IexError, Payload, RequestSpec, StandardOptions};
use crate::timeseries::{TimeSeriesArgs, TimeSeriesOptions, time_series_request};

/// Wall Street Horizon corporate event calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallStreetHorizon {
    AnalystDays,
    BoardOfDirectorsMeeting,
    BusinessUpdates,
    Buybacks,
    CapitalMarketsDay,
    CompanyTravel,
    FilingDueDates,
    FiscalQuarterEnd,
    Forum,
    GeneralConference,
    FdaAdvisoryCommitteeMeetings,
    Holidays,
    IndexChanges,
    Ipos,
    LegalActions,
    MergersAndAcquisitions,
    ProductEvents,
    ResearchAndDevelopmentDays,
    SameStoreSales,
    SecondaryOfferings,
    Seminars,
    ShareholderMeetings,
    SummitMeetings,
    TradeShows,
    WitchingHours,
    Workshops,
}

impl WallStreetHorizon {
    /// The time series id.
    pub fn id(self) -> &'static str {
        use WallStreetHorizon::*;
        match self {
            AnalystDays => "PREMIUM_WALLSTREETHORIZON_ANALYST_DAY",
            BoardOfDirectorsMeeting => "PREMIUM_WALLSTREETHORIZON_BOARD_OF_DIRECTORS_MEETING",
            BusinessUpdates => "PREMIUM_WALLSTREETHORIZON_BUSINESS_UPDATE",
            Buybacks => "PREMIUM_WALLSTREETHORIZON_BUYBACK",
            CapitalMarketsDay => "PREMIUM_WALLSTREETHORIZON_CAPITAL_MARKETS_DAY",
            CompanyTravel => "PREMIUM_WALLSTREETHORIZON_COMPANY_TRAVEL",
            FilingDueDates => "PREMIUM_WALLSTREETHORIZON_FILING_DUE_DATE",
            FiscalQuarterEnd => "PREMIUM_WALLSTREETHORIZON_FISCAL_QUARTER_END_DATE",
            Forum => "PREMIUM_WALLSTREETHORIZON_FORUM",
            GeneralConference => "PREMIUM_WALLSTREETHORIZON_GENERAL_CONFERENCE",
            FdaAdvisoryCommitteeMeetings => {
                "PREMIUM_WALLSTREETHORIZON_STOCK_SPECIFIC_FDA_ADVISORY_COMMITTEE_MEETING"
            }
            Holidays => "PREMIUM_WALLSTREETHORIZON_HOLIDAYS",
            IndexChanges => "PREMIUM_WALLSTREETHORIZON_INDEX_CHANGE",
            Ipos => "PREMIUM_WALLSTREETHORIZON_INITIAL_PUBLIC_OFFERING",
            LegalActions => "PREMIUM_WALLSTREETHORIZON_LEGAL_ACTIONS",
            MergersAndAcquisitions => "PREMIUM_WALLSTREETHORIZON_MERGER_ACQUISITIONS",
            ProductEvents => "PREMIUM_WALLSTREETHORIZON_PRODUCT_EVENTS",
            ResearchAndDevelopmentDays => "PREMIUM_WALLSTREETHORIZON_RD_DAY",
            SameStoreSales => "PREMIUM_WALLSTREETHORIZON_SAME_STORE_SALES",
            SecondaryOfferings => "PREMIUM_WALLSTREETHORIZON_SECONDARY_OFFERING",
            Seminars => "PREMIUM_WALLSTREETHORIZON_SEMINAR",
            ShareholderMeetings => "PREMIUM_WALLSTREETHORIZON_SHAREHOLDER_MEETING",
            SummitMeetings => "PREMIUM_WALLSTREETHORIZON_SUMMIT_MEETING",
            TradeShows => "PREMIUM_WALLSTREETHORIZON_TRADE_SHOW",
            WitchingHours => "PREMIUM_WALLSTREETHORIZON_WITCHING_HOURS",
            Workshops => "PREMIUM_WALLSTREETHORIZON_WORKSHOP",
        }
    }
}

/// Builds a Wall Street Horizon request; without a symbol the whole calendar is returned.
pub fn wall_street_horizon_request(
    event: WallStreetHorizon,
    symbol: Option<&str>,
    opts: &TimeSeriesOptions,
) -> Result<RequestSpec, IexError> {
    let mut args = TimeSeriesArgs::new(event.id());
    if let Some(s) = symbol.map(str::trim).filter(|s| !s.is_empty()) {
        args = args.key(s.to_uppercase());
    }
    time_series_request(&args, opts)
}

/// Premium endpoints, borrowing the client's configuration.
#[derive(Debug, Clone, Copy)]
pub struct Premium<'a> {
    client: &'a IexClient,
}

impl IexClient {
    pub fn premium(&self) -> Premium<'_> {
        Premium { client: self }
    }
}

macro_rules! wsh_endpoints {
    ($($(#[$meta:meta])* $name:ident => $variant:ident;)+) => {
        impl Premium<'_> {
            $(
                $(#[$meta])*
                ///
                /// # Errors
                ///
                /// Fails on invalid time series options or an unsuccessful request.
                pub async fn $name(
                    &self,
                    symbol: Option<&str>,
                    opts: &TimeSeriesOptions,
                    std_opts: &StandardOptions,
                ) -> Result<Payload, IexError> {
                    self.wall_street_horizon(WallStreetHorizon::$variant, symbol, opts, std_opts)
                        .await
                }
            )+
        }
    };
}

impl Premium<'_> {
    /// Fetches any Wall Street Horizon calendar.
    ///
    /// # Errors
    ///
    /// Fails on invalid time series options or an unsuccessful request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, opts, std_opts), err))]
    pub async fn wall_street_horizon(
        &self,
        event: WallStreetHorizon,
        symbol: Option<&str>,
        opts: &TimeSeriesOptions,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        let spec = wall_street_horizon_request(event, symbol, opts)?.with_options(std_opts);
        self.client.execute(&spec).await
    }
}

wsh_endpoints! {
    /// Meetings where executives present performance and prospects.
    analyst_days => AnalystDays;
    /// Formal board meetings.
    board_of_directors_meeting => BoardOfDirectorsMeeting;
    business_updates => BusinessUpdates;
    buybacks => Buybacks;
    capital_markets_day => CapitalMarketsDay;
    company_travel => CompanyTravel;
    filing_due_dates => FilingDueDates;
    fiscal_quarter_end => FiscalQuarterEnd;
    forum => Forum;
    general_conference => GeneralConference;
    fda_advisory_committee_meetings => FdaAdvisoryCommitteeMeetings;
    /// Exchange and banking holidays.
    holidays => Holidays;
    index_changes => IndexChanges;
    ipos => Ipos;
    legal_actions => LegalActions;
    mergers_and_acquisitions => MergersAndAcquisitions;
    product_events => ProductEvents;
    research_and_development_days => ResearchAndDevelopmentDays;
    same_store_sales => SameStoreSales;
    secondary_offerings => SecondaryOfferings;
    seminars => Seminars;
    shareholder_meetings => ShareholderMeetings;
    summit_meetings => SummitMeetings;
    trade_shows => TradeShows;
    /// Quarterly options and futures expirations.
    witching_hours => WitchingHours;
    workshops => Workshops;
}
