pub(super) const ENTRIES: &[(&str, &str)] = &[
    ("sidebar.dashboard", "Dashboard"),
    ("sidebar.zones", "Zones"),
    ("sidebar.plans", "Plans"),
    ("sidebar.contact", "Contact"),
    ("sidebar.users", "Users"),
    ("sidebar.settings", "Settings"),
    ("common.appName", "Admin dashboard"),
    ("common.search", "Search..."),
    ("common.openMenu", "Open menu"),
    ("common.closeMenu", "Close menu"),
    ("common.collapse", "Collapse"),
    ("common.expand", "Expand"),
    ("common.notifications", "Notifications"),
    ("common.adminUser", "Admin User"),
    ("common.administrator", "Administrator"),
    ("common.logout", "Log out"),
    ("common.lightMode", "Light mode"),
    ("common.darkMode", "Dark mode"),
    ("common.selectLanguage", "Select language"),
    ("common.loading", "Loading..."),
    ("common.loadError", "Could not load data. Please try again later."),
    ("common.deleteError", "The record could not be deleted."),
    ("common.delete", "Delete"),
    ("common.confirmDelete", "Are you sure you want to delete this record?"),
    ("common.name", "Name"),
    ("common.id", "ID"),
    ("common.actions", "Actions"),
    ("common.total", "Total"),
    ("pages.dashboard.title", "Dashboard"),
    ("pages.dashboard.subtitle", "Welcome to the admin dashboard"),
    ("pages.zones.title", "Coverage zones"),
    ("pages.zones.subtitle", "Service areas and installation terms"),
    ("pages.zones.empty", "No zones registered"),
    ("pages.plans.title", "Plans"),
    ("pages.plans.subtitle", "Internet plans and their benefits"),
    ("pages.plans.empty", "No plans registered"),
    ("pages.contact.title", "Contact"),
    ("pages.users.title", "Users"),
    ("pages.settings.title", "Settings"),
    ("pages.placeholder.subtitle", "This section will be available soon"),
    ("pages.notFound.title", "Page not found"),
    ("pages.notFound.back", "Back to dashboard"),
    ("common.create", "Create"),
    ("common.edit", "Edit"),
    ("common.save", "Save"),
    ("common.cancel", "Cancel"),
    ("common.saveError", "Could not save. Please try again."),
    ("forms.required", "This field is required"),
    ("forms.invalidEmail", "Invalid email"),
    ("forms.invalidNumber", "Must be a number"),
    ("forms.nonNegative", "Must be greater than or equal to 0"),
    ("forms.benefitsRequired", "Must have at least one benefit"),
    ("pages.zones.createZone", "New zone"),
    ("pages.zones.editZone", "Edit zone"),
    ("pages.zones.form.name", "Name"),
    ("pages.zones.form.description", "Description"),
    ("pages.zones.form.latitude", "Latitude"),
    ("pages.zones.form.longitude", "Longitude"),
    ("pages.zones.form.phone", "Phone"),
    ("pages.zones.form.email", "Email"),
    ("pages.zones.form.address", "Address"),
    ("pages.zones.form.freeInstallation", "Free installation"),
    ("pages.zones.form.noCommitment", "No commitment"),
    ("pages.zones.form.isActive", "Active"),
    ("pages.plans.createPlan", "New plan"),
    ("pages.plans.form.name", "Name"),
    ("pages.plans.form.price", "Price"),
    ("pages.plans.form.speed", "Speed"),
    ("pages.plans.form.speedUnit", "Unit"),
    ("pages.plans.form.zone", "Zone"),
    ("pages.plans.form.benefits", "Benefits"),
    ("pages.plans.form.addBenefit", "Add benefit"),
    ("pages.plans.form.removeBenefit", "Remove benefit"),
    ("pages.plans.form.benefitDescription", "Benefit description"),
    ("pages.plans.form.selectIcon", "Select icon"),
    ("pages.plans.form.searchIcon", "Search icon..."),
    ("pages.plans.form.noIconsFound", "No icons found"),
    ("pages.plans.form.isActive", "Active"),
    ("pages.plans.form.isRecommended", "Recommended"),
];
