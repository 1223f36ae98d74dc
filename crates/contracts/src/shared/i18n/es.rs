pub(super) const ENTRIES: &[(&str, &str)] = &[
    ("sidebar.dashboard", "Inicio"),
    ("sidebar.zones", "Zonas"),
    ("sidebar.plans", "Planes"),
    ("sidebar.contact", "Contacto"),
    ("sidebar.users", "Usuarios"),
    ("sidebar.settings", "Configuración"),
    ("common.appName", "Panel de administración"),
    ("common.search", "Buscar..."),
    ("common.openMenu", "Abrir menú"),
    ("common.closeMenu", "Cerrar menú"),
    ("common.collapse", "Colapsar"),
    ("common.expand", "Expandir"),
    ("common.notifications", "Notificaciones"),
    ("common.adminUser", "Usuario Admin"),
    ("common.administrator", "Administrador"),
    ("common.logout", "Cerrar sesión"),
    ("common.lightMode", "Modo claro"),
    ("common.darkMode", "Modo oscuro"),
    ("common.selectLanguage", "Seleccionar idioma"),
    ("common.loading", "Cargando..."),
    ("common.loadError", "Error al cargar los datos. Intenta de nuevo más tarde."),
    ("common.deleteError", "No se pudo eliminar el registro."),
    ("common.delete", "Eliminar"),
    ("common.confirmDelete", "¿Seguro que deseas eliminar este registro?"),
    ("common.name", "Nombre"),
    ("common.id", "ID"),
    ("common.actions", "Acciones"),
    ("common.total", "Total"),
    ("pages.dashboard.title", "Panel de control"),
    ("pages.dashboard.subtitle", "Bienvenido al panel de administración"),
    ("pages.zones.title", "Zonas de cobertura"),
    ("pages.zones.subtitle", "Áreas de servicio y condiciones de instalación"),
    ("pages.zones.empty", "No hay zonas registradas"),
    ("pages.plans.title", "Planes"),
    ("pages.plans.subtitle", "Planes de internet y sus beneficios"),
    ("pages.plans.empty", "No hay planes registrados"),
    ("pages.contact.title", "Contacto"),
    ("pages.users.title", "Usuarios"),
    ("pages.settings.title", "Configuración"),
    ("pages.placeholder.subtitle", "Esta sección estará disponible pronto"),
    ("pages.notFound.title", "Página no encontrada"),
    ("pages.notFound.back", "Volver al inicio"),
    ("common.create", "Crear"),
    ("common.edit", "Editar"),
    ("common.save", "Guardar"),
    ("common.cancel", "Cancelar"),
    ("common.saveError", "No se pudo guardar. Intenta de nuevo."),
    ("forms.required", "Este campo es requerido"),
    ("forms.invalidEmail", "Email inválido"),
    ("forms.invalidNumber", "Debe ser un número"),
    ("forms.nonNegative", "Debe ser mayor o igual a 0"),
    ("forms.benefitsRequired", "Debe tener al menos un beneficio"),
    ("pages.zones.createZone", "Nueva zona"),
    ("pages.zones.editZone", "Editar zona"),
    ("pages.zones.form.name", "Nombre"),
    ("pages.zones.form.description", "Descripción"),
    ("pages.zones.form.latitude", "Latitud"),
    ("pages.zones.form.longitude", "Longitud"),
    ("pages.zones.form.phone", "Teléfono"),
    ("pages.zones.form.email", "Email"),
    ("pages.zones.form.address", "Dirección"),
    ("pages.zones.form.freeInstallation", "Instalación gratuita"),
    ("pages.zones.form.noCommitment", "Sin permanencia"),
    ("pages.zones.form.isActive", "Activa"),
    ("pages.plans.createPlan", "Nuevo plan"),
    ("pages.plans.form.name", "Nombre"),
    ("pages.plans.form.price", "Precio"),
    ("pages.plans.form.speed", "Velocidad"),
    ("pages.plans.form.speedUnit", "Unidad"),
    ("pages.plans.form.zone", "Zona"),
    ("pages.plans.form.benefits", "Beneficios"),
    ("pages.plans.form.addBenefit", "Agregar beneficio"),
    ("pages.plans.form.removeBenefit", "Quitar beneficio"),
    ("pages.plans.form.benefitDescription", "Descripción del beneficio"),
    ("pages.plans.form.selectIcon", "Seleccionar icono"),
    ("pages.plans.form.searchIcon", "Buscar icono..."),
    ("pages.plans.form.noIconsFound", "No se encontraron iconos"),
    ("pages.plans.form.isActive", "Activo"),
    ("pages.plans.form.isRecommended", "Recomendado"),
];
