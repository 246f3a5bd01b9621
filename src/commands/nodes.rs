use super::CommandDef;

pub const COMMANDS: &[CommandDef] = command_table!{Nodes;
    "CENTER" ["node", "node1", "node2", "node3", "radius"], "Define a node at the center of curvature of two or three nodes";
    "EEXTRUDE" ["action", "nelem", "space", "dist", "theta", "tfact", "", "bckey"], "Extrude 2D plane elements into 3D solids";
    "FILL" ["node1", "node2", "nfill", "nstrt", "ninc", "itime", "inc", "space"], "Generate a line of nodes between two existing nodes";
    "MOVE" ["node", "kc1", "x1", "y1", "z1", "kc2", "x2", "y2", "z2"], "Calculate and move a node to an intersection";
    "N" ["node", "x", "y", "z", "thxy", "thyz", "thzx"] -> Node, "Define a node";
    "NANG" ["node", "x1", "x2", "x3", "y1", "y2", "y3", "z1", "z2", "z3"], "Rotate the nodal coordinate system by direction cosines";
    "NAXIS" ["action", "val"], "Generate nodes for general axisymmetric element sections";
    "NDELE" ["node1", "node2", "ninc"], "Delete nodes";
    "NDIST" ["nd1", "nd2"] -> NodeDistance, "Calculate and list the distance between two nodes";
    "NGEN" ["itime", "inc", "node1", "node2", "ninc", "dx", "dy", "dz", "space"], "Generate additional nodes from a pattern of nodes";
    "NKPT" ["node", "npt"], "Define a node at an existing keypoint location";
    "NLIST" ["node1", "node2", "ninc", "lcoord", "sort1", "sort2", "sort3", "kinternal"], "List nodes";
    "NMODIF" ["node", "x", "y", "z", "thxy", "thyz", "thzx"], "Modify an existing node";
    "NORA" ["area", "ndir"], "Rotate nodal coordinate systems perpendicular to an existing area";
    "NORL" ["line", "area", "ndir"], "Rotate nodal coordinate systems perpendicular to an existing area edge";
    "NPLOT" ["knum"], "Display the nodes";
    "NREAD" ["fname", "ext"], "Read nodes from a file";
    "NROTAT" ["node1", "node2", "ninc"], "Rotate nodal coordinate systems into the active system";
    "NRRANG" ["nmin", "nmax", "ninc"], "Specify the range of nodes to be read from the node file";
    "NSCALE" ["inc", "node1", "node2", "ninc", "rx", "ry", "rz"], "Generate a scaled set of nodes from a pattern of nodes";
    "NSMOOTH" ["npass"], "Smooth selected nodes among selected elements";
    "NSYM" ["ncomp", "inc", "node1", "node2", "ninc"], "Generate a reflected set of nodes";
    "NWRITE" ["fname", "ext", "", "kappnd"], "Write nodes to a file";
    "QUAD" ["node1", "nintr", "node2", "nfill", "nstrt", "ninc", "pkfac"], "Generate a quadratic line of nodes from three nodes";
    "TRANSFER" ["kcnto", "inc", "node1", "node2", "ninc"], "Transfer a pattern of nodes to another coordinate system";
};
