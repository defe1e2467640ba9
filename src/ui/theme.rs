//! Shared class strings so pages and components stay visually consistent.
//! Single light theme with the purple-to-pink brand gradient.

pub const BTN_PRIMARY: &str =
    "rounded-lg brand-gradient px-5 py-2.5 text-sm font-semibold text-white transition hover:opacity-90";

pub const BTN_OUTLINE: &str =
    "rounded-lg border border-gray-300 bg-white px-5 py-2.5 text-sm font-semibold text-gray-700 transition hover:border-purple-400 hover:text-purple-600";

pub const BTN_GHOST_ON_DARK: &str =
    "rounded-lg border border-white/70 px-6 py-3 text-base font-semibold text-white transition hover:bg-white hover:text-purple-700";

pub const BTN_LIGHT_ON_DARK: &str =
    "rounded-lg bg-white px-6 py-3 text-base font-semibold text-purple-700 transition hover:bg-gray-100";

pub const INPUT: &str =
    "w-full rounded-lg border border-gray-300 bg-white px-3 py-2 text-sm text-gray-900 focus:border-purple-500 focus:outline-none";

pub const SELECT: &str =
    "w-full rounded-lg border border-gray-300 bg-white px-3 py-2 text-sm text-gray-700 focus:border-purple-500 focus:outline-none";

pub const LABEL: &str = "block text-sm font-medium text-gray-700";

pub const FIELD_ERROR: &str = "mt-1 text-xs text-rose-600";

pub const PANEL: &str = "rounded-xl border border-gray-200 bg-white shadow-sm";

pub const PAGE_HERO: &str = "brand-gradient py-12 text-white";

pub const PAGE_BODY: &str = "mx-auto max-w-7xl px-4 py-8 sm:px-6 lg:px-8";

pub const TABLE_HEADER: &str =
    "border-b border-gray-200 bg-gray-50 text-left text-xs font-semibold uppercase tracking-wide text-gray-500";

pub const TABLE_BODY: &str = "divide-y divide-gray-200 text-sm text-gray-700";

pub const PILL: &str =
    "inline-flex items-center rounded-full bg-gray-100 px-2 py-0.5 text-xs font-medium text-gray-700";

pub const PILL_BRAND: &str =
    "inline-flex items-center rounded-full brand-gradient px-2 py-0.5 text-xs font-medium text-white";
