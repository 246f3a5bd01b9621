use super::CommandDef;

pub const COMMANDS: &[CommandDef] = command_table!{Elements;
    "E" ["i", "j", "k", "l", "m", "n", "o", "p"] -> Element, "Define an element by node connectivity";
    "EDELE" ["iel1", "iel2", "inc"], "Delete selected elements from the model";
    "EEMBED" [], "Generate embedded reinforcing elements";
    "ECPCHG" [], "Optimize degree-of-freedom usage in a coupled acoustic model";
    "EGEN" ["itime", "ninc", "iel1", "iel2", "ieinc", "minc", "tinc", "rinc", "cinc", "sinc", "dx", "dy", "dz"], "Generate elements from an existing pattern";
    "EGID" ["val"], "Specify a global identifier for a set of elements";
    "EINFIN" ["compname", "pnode_nref1", "nref2", "nref3", "matid"], "Generate structural infinite elements from selected nodes";
    "EINTF" ["toler", "k", "tlab", "kcn", "dx", "dy", "dz", "knonrot"], "Define two-node elements between coincident or offset nodes";
    "ELBOW" ["transkey", "tol", "dof", "cons1", "cons2", "cons3", "cons4"], "Specify degrees of freedom to be coupled for end release";
    "ELIST" ["iel1", "iel2", "inc", "nnkey", "rkey"], "List the elements and their attributes";
    "EMID" ["key", "edges"], "Add or remove midside nodes";
    "EMODIF" ["iel", "stloc", "i1", "i2", "i3", "i4", "i5", "i6", "i7", "i8"], "Modify a previously defined element";
    "EMORE" ["q", "r", "s", "t", "u", "v", "w", "x"], "Add more nodes to the just-defined element";
    "EMSEL" ["type", "", "", "vmin", "vmax", "vinc"], "Select a group of reinforcing members";
    "EMTGEN" ["ncomp", "ecomp", "pncomp", "dof", "gap", "gapmin", "fkn", "epzero", "", "smethod"], "Generate a set of electromechanical transducer elements";
    "EN" ["iel", "i", "j", "k", "l", "m", "n", "o", "p"], "Define an element by its number and node connectivity";
    "ENDRELEASE" ["", "tolerance", "dof1", "dof2", "dof3", "dof4", "kjct", "kcheck"], "Specify degrees of freedom to be decoupled for end release";
    "ENGEN" ["iinc", "itime", "ninc", "iel1", "iel2", "ieinc", "minc", "tinc", "rinc", "cinc", "sinc", "dx", "dy", "dz"], "Generate elements from an existing pattern";
    "ENORM" ["enum"], "Reorient shell element normals or line element node connectivity";
    "ENSYM" ["iinc", "", "ninc", "iel1", "iel2", "ieinc"], "Generate elements by symmetry reflection";
    "EPLOT" [], "Produce an element display";
    "EREAD" ["fname", "ext"], "Read elements from a file";
    "EREINF" ["koffalim", "ktri"], "Generate reinforcing elements from selected existing elements";
    "ERRANG" ["emin", "emax", "einc"], "Specify the element range to be read from a file";
    "ESURF" ["xnode", "tlab", "shape"], "Generate elements overlaid on the free faces of selected elements";
    "ESYM" ["", "ninc", "iel1", "iel2", "ieinc"], "Generate elements from a pattern by a symmetry reflection";
    "EWRITE" ["fname", "ext", "", "kappnd", "format"], "Write the selected elements to a file";
    "GCDEF" ["option", "sect1", "sect2", "matid", "realid", "sect1end", "sect2end"], "Define interface interactions between general contact surfaces";
    "GCGEN" ["option", "featureangle", "edgekey", "splitkey", "selopt"], "Create contact elements for general contact";
    "LAYLIST" ["iel", "layr1", "layr2", "mplab1", "mplab2"], "List real constants material properties for layered elements";
    "LAYPLOT" ["iel", "layr1", "layr2"], "Display the layer stacking of layered elements";
    "LFSURF" ["sline", "tline"], "Generate surface elements overlaid on the edge of existing elements";
    "NDSURF" ["snode", "telem", "dimn"], "Generate surface elements overlaid on the edge of existing elements";
    "SHSD" ["rid", "action", "chch_opt", "cgap", "cpen"], "Create or delete a shell-solid interface";
    "SWADD" ["ecomp", "shrd", "ncm1", "ncm2", "ncm3", "ncm4", "ncm5", "ncm6", "ncm7", "ncm8", "ncm9"], "Add more surfaces to an existing spot weld set";
    "SWDEL" ["ecomp"], "Delete spot weld sets";
    "SWGEN" ["ecomp", "swrd", "ncm1", "ncm2", "snd1", "snd2", "shrd", "dirx", "diry", "dirz", "itty", "icty"], "Create a new spot weld set";
    "SWLIST" ["ecomp"], "List spot weld sets";
    "TSHAP" ["shape"], "Define simple 2D and 3D geometric surfaces for target elements";
    "UPGEOM" ["factor", "lstep", "sbstep", "fname", "ext", "", "upesys"], "Add displacements from a previous analysis and update the geometry";
    "USRDOF" ["action", "dof1", "dof2", "dof3", "dof4", "dof5", "dof6", "dof7", "dof8", "dof9", "dof10"], "Specify the degrees of freedom for a user-defined element";
    "USRELEM" ["nnodes", "ndim", "keyshape", "nreal", "nsavevars", "nrsltvar", "keyansmat", "nintpnts", "kestress", "keysym"], "Specify the characteristics of a user-defined element type";
    "WTBCREATE" ["iel", "node", "damp"], "Create a USER300 element for a wind turbine";
    "AFSURF" ["sarea", "tline"], "Generate surface elements overlaid on the surface of existing solid elements";
    "/DFLAB" ["dof", "displab", "forcelab"], "Change degree-of-freedom labels for user custom elements";
};
