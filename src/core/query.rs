//! Query state for the orders view: search, status filter and sort

use crate::core::error::QueryError;
use crate::core::order::OrderStatus;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw query parameters, as they arrive from a presentation layer
///
/// Every field is a plain string with a sensible default, so a partially
/// filled parameter set always deserializes. Turning it into a
/// [`QueryState`] is where unknown values are rejected.
///
/// # Example
/// ```rust,ignore
/// let params: QueryParams = serde_json::from_str(r#"{"sortField": "total"}"#)?;
/// let state = QueryState::try_from(params)?;
/// // state.sort_direction defaults to desc
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryParams {
    /// Case-insensitive substring matched against id, customer and pizza
    pub search_term: String,

    /// `"all"` or a status label (`"Out for Delivery"`, `"Cancelled"`, ...)
    pub status_filter: String,

    /// Order attribute to sort by (`"orderDate"`, `"total"`, ...)
    pub sort_field: String,

    /// `"asc"` or `"desc"`
    pub sort_direction: String,
}

impl Default for QueryParams {
    fn default() -> Self {
        QueryState::default().into()
    }
}

/// Sortable order attribute
///
/// Closed set: each variant selects one comparator, so there is no way to
/// ask for a field that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    Id,
    CustomerName,
    PizzaType,
    Quantity,
    #[default]
    OrderDate,
    Status,
    Total,
}

impl SortField {
    pub const ALL: [SortField; 7] = [
        SortField::Id,
        SortField::CustomerName,
        SortField::PizzaType,
        SortField::Quantity,
        SortField::OrderDate,
        SortField::Status,
        SortField::Total,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::CustomerName => "customerName",
            SortField::PizzaType => "pizzaType",
            SortField::Quantity => "quantity",
            SortField::OrderDate => "orderDate",
            SortField::Status => "status",
            SortField::Total => "total",
        }
    }

    /// Column header shown for the field
    pub fn column_title(&self) -> &'static str {
        match self {
            SortField::Id => "Order ID",
            SortField::CustomerName => "Customer",
            SortField::PizzaType => "Pizza",
            SortField::Quantity => "Qty",
            SortField::OrderDate => "Date",
            SortField::Status => "Status",
            SortField::Total => "Total",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "customerName" | "customer_name" => Ok(SortField::CustomerName),
            "pizzaType" | "pizza_type" => Ok(SortField::PizzaType),
            "quantity" => Ok(SortField::Quantity),
            "orderDate" | "order_date" => Ok(SortField::OrderDate),
            "status" => Ok(SortField::Status),
            "total" => Ok(SortField::Total),
            other => Err(QueryError::invalid("sortField", other)),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// The opposite direction
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(QueryError::invalid("sortDirection", other)),
        }
    }
}

/// Status filter: everything, or a single status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    /// Whether an order with `status` passes the filter
    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    /// Wire value of the filter
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.label(),
        }
    }

    /// Options of the status dropdown, with their labels
    pub fn options() -> Vec<(StatusFilter, &'static str)> {
        std::iter::once((StatusFilter::All, "All Status"))
            .chain(
                OrderStatus::ALL
                    .iter()
                    .map(|status| (StatusFilter::Only(*status), status.label())),
            )
            .collect()
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse::<OrderStatus>()
            .map(StatusFilter::Only)
            .map_err(|_| QueryError::invalid("statusFilter", s))
    }
}

/// Typed query state driving the orders view
///
/// Owned by the caller. Every change is followed by a full
/// [`compute_view`](crate::engine::compute_view).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QueryState {
    pub search_term: String,
    pub status_filter: StatusFilter,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_status(mut self, filter: StatusFilter) -> Self {
        self.status_filter = filter;
        self
    }

    pub fn with_sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_field = field;
        self.sort_direction = direction;
        self
    }

    /// Apply a click on a column header
    ///
    /// Same field flips the direction, a different field is selected
    /// ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }
    }

    /// Direction arrow for a column header, `None` when the column is not
    /// the active sort
    pub fn sort_indicator(&self, field: SortField) -> Option<SortDirection> {
        (self.sort_field == field).then_some(self.sort_direction)
    }
}

impl TryFrom<QueryParams> for QueryState {
    type Error = QueryError;

    fn try_from(params: QueryParams) -> Result<Self, Self::Error> {
        QueryState::try_from(&params)
    }
}

impl TryFrom<&QueryParams> for QueryState {
    type Error = QueryError;

    fn try_from(params: &QueryParams) -> Result<Self, Self::Error> {
        Ok(QueryState {
            search_term: params.search_term.clone(),
            status_filter: params.status_filter.parse()?,
            sort_field: params.sort_field.parse()?,
            sort_direction: params.sort_direction.parse()?,
        })
    }
}

impl From<QueryState> for QueryParams {
    fn from(state: QueryState) -> Self {
        QueryParams {
            search_term: state.search_term,
            status_filter: state.status_filter.as_str().to_string(),
            sort_field: state.sort_field.as_str().to_string(),
            sort_direction: state.sort_direction.as_str().to_string(),
        }
    }
}
