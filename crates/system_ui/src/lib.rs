//! Design-system primitive library for the dashboard shell and its pages.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the dashboard CSS layers.
//! Pages should compose these primitives instead of emitting ad hoc control
//! markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    page_count, page_range, pagination_slots, AppShell, Avatar, Badge, BreadcrumbItem,
    BreadcrumbList, Button, ButtonSize, ButtonVariant, CheckboxField, Cluster, DataTable,
    Elevation, EmptyState, FieldGroup, FieldVariant, Grid, Heading, IconButton, LayoutAlign,
    LayoutGap, LayoutJustify, LayoutPadding, NavLink, NavList, PageSlot, Pagination, Panel,
    SelectField, ShellFooter, ShellHeader, ShellMain, ShellSidebar, Spinner, Stack, Surface,
    SurfaceVariant, Switch, TableCell, TableHeaderCell, Text, TextField, TextRole, TextTone,
    ToastRegion, ToastSurface, Tooltip, TooltipPlacement,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        page_count, page_range, pagination_slots, AppShell, Avatar, Badge, BreadcrumbItem,
        BreadcrumbList, Button, ButtonSize, ButtonVariant, CheckboxField, Cluster, DataTable,
        Elevation, EmptyState, FieldGroup, FieldVariant, Grid, Heading, Icon, IconButton,
        IconName, IconSize, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, NavLink,
        NavList, PageSlot, Pagination, Panel, SelectField, ShellFooter, ShellHeader, ShellMain,
        ShellSidebar, Spinner, Stack, Surface, SurfaceVariant, Switch, TableCell,
        TableHeaderCell, Text, TextField, TextRole, TextTone, ToastRegion, ToastSurface, Tooltip,
        TooltipPlacement,
    };
}
